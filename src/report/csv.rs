//! CSV output. Column order and presence are part of the format contract:
//! downstream consumers read these files positionally.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use csv::Writer;

use crate::models::Record;

/// Columns of the pre-clean snapshot (`merged_output_untidy.csv`).
pub const UNTIDY_COLUMNS: &[&str] = &[
    "Title",
    "OriginalTags",
    "ManualTags",
    "Owner",
    "Description",
    "DateCreated",
    "DateUpdated",
    "PageURL",
    "License",
    "FileType",
    "Source",
];

/// Columns of the final cleaned output (`merged_output.csv`).
pub const CLEANED_COLUMNS: &[&str] = &[
    "Title",
    "OriginalTags",
    "ManualTags",
    "CombinedTags",
    "ODSCategories",
    "Owner",
    "Description",
    "DateCreated",
    "DateUpdated",
    "PageURL",
    "License",
    "FileType",
    "Source",
    "AssetStatus",
];

/// Write the post-merge, pre-clean snapshot.
pub fn write_untidy(records: &[Record], path: &Path) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(UNTIDY_COLUMNS)?;
    for r in records {
        writer.write_record([
            cell(&r.title),
            cell(&r.original_tags),
            cell(&r.manual_tags),
            cell(&r.owner),
            cell(&r.description),
            date_cell(r.date_created),
            date_cell(r.date_updated),
            cell(&r.page_url),
            cell(&r.licence),
            cell(&r.file_type),
            r.source.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the final cleaned and categorised output.
pub fn write_cleaned(records: &[Record], path: &Path) -> Result<()> {
    let mut writer =
        Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(CLEANED_COLUMNS)?;
    for r in records {
        writer.write_record([
            cell(&r.title),
            cell(&r.original_tags),
            cell(&r.manual_tags),
            cell(&r.combined_tags),
            cell(&r.ods_categories),
            cell(&r.owner),
            cell(&r.description),
            date_cell(r.date_created),
            date_cell(r.date_updated),
            cell(&r.page_url),
            cell(&r.licence),
            cell(&r.file_type),
            r.source.to_string(),
            cell(&r.asset_status),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn cell(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn date_cell(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}
