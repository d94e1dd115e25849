//! `catalog-mergr` — merge open-data catalogue exports into one canonical,
//! categorised dataset.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load output config ([`config::load_config`]).
//! 3. Detect which source exports are present ([`ingest::detect_sources`]).
//! 4. Ingest and merge every source ([`ingest`]).
//! 5. Persist the pre-clean snapshot ([`report::csv::write_untidy`]).
//! 6. Clean and categorise ([`clean`], [`category`]).
//! 7. Persist the final output ([`report::csv::write_cleaned`]).
//! 8. Render the requested report ([`report`]).

mod category;
mod clean;
mod cli;
mod config;
mod ingest;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use config::load_config;
use models::Source;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve data root
    let root = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&root, cli.config.as_deref())?;

    let excluded: Vec<Source> = cli.exclude_source.iter().map(Into::into).collect();

    let included: Vec<_> = ingest::detect_sources(&root)
        .into_iter()
        .filter(|spec| !excluded.contains(&spec.source))
        .collect();

    if included.is_empty() {
        eprintln!("No recognisable source exports found in {}", root.display());
        std::process::exit(1);
    }

    let mut records = ingest::ingest_all(&root, &included, cli.quiet)?;

    if !cli.quiet {
        for spec in &included {
            let count = records.iter().filter(|r| r.source == spec.source).count();
            eprintln!("  {} {} {} datasets", "→".cyan(), spec.source, count);
        }
    }

    // Snapshot before cleaning, for inspection independent of the rules
    report::csv::write_untidy(&records, &root.join(&config.output.untidy))?;

    clean::clean_records(&mut records);

    report::csv::write_cleaned(&records, &root.join(&config.output.cleaned))?;

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&records, &root, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    fn write_file(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut f = std::fs::File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    /// Full pipeline over a small multi-source tree, checked end to end.
    #[test]
    fn test_pipeline_end_to_end() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();

        write_file(
            &root.join("ckan/aberdeen.csv"),
            "Title,OriginalTags,ManualTags,Owner,Description,DateCreated,DateUpdated,PageURL,License,FileType\n\
             Cycle counters,Cycling;Bus,,Aberdeen,Daily counts,2021-01-02,2021-02-03,http://a,uk-ogl,xlsx\n",
        );
        write_file(
            &root.join("scotgov-datasets-sparkql.csv"),
            "title,category,organization,notes,date_created,date_updated,url,licence\n\
             Odd dataset,zzz-no-such-tag,SEPA,Stuff,2020-01-01,2020-01-01T10:00:00+00:00,http://b,\n",
        );

        let specs = ingest::detect_sources(root);
        assert_eq!(specs.len(), 2);

        let mut records = ingest::ingest_all(root, &specs, true).unwrap();
        assert_eq!(records.len(), 2);
        // merge order follows the source table: ckan before sparql
        assert_eq!(records[0].source, Source::CkanApi);
        assert_eq!(records[1].source, Source::Sparql);

        report::csv::write_untidy(&records, &root.join("untidy.csv")).unwrap();
        clean::clean_records(&mut records);
        report::csv::write_cleaned(&records, &root.join("cleaned.csv")).unwrap();

        let ckan = &records[0];
        let combined: std::collections::BTreeSet<&str> =
            ckan.combined_tags.as_deref().unwrap().split(';').collect();
        assert_eq!(combined, ["bus", "cycling"].into_iter().collect());
        assert!(ckan.ods_categories.as_deref().unwrap().contains("Transportation"));
        assert_eq!(ckan.owner.as_deref(), Some("Aberdeen City Council"));
        assert_eq!(ckan.licence.as_deref(), Some("Open Government Licence v3.0"));
        assert_eq!(ckan.file_type.as_deref(), Some("MS EXCEL"));

        let sparql = &records[1];
        assert_eq!(sparql.ods_categories.as_deref(), Some("Uncategorised"));
        assert_eq!(sparql.licence.as_deref(), Some("No licence"));
        assert_eq!(
            sparql.owner.as_deref(),
            Some("Scottish Environment Protection Agency")
        );

        let cleaned = std::fs::read_to_string(root.join("cleaned.csv")).unwrap();
        assert!(cleaned.starts_with(&report::csv::CLEANED_COLUMNS.join(",")));
        assert_eq!(cleaned.lines().count(), 3);
    }

    /// Zero records from every source still produces correctly-columned files.
    #[test]
    fn test_pipeline_empty_sources() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::create_dir_all(root.join("ckan")).unwrap();

        let specs = ingest::detect_sources(root);
        assert_eq!(specs.len(), 1);

        let mut records = ingest::ingest_all(root, &specs, true).unwrap();
        assert!(records.is_empty());

        report::csv::write_untidy(&records, &root.join("untidy.csv")).unwrap();
        clean::clean_records(&mut records);
        report::csv::write_cleaned(&records, &root.join("cleaned.csv")).unwrap();

        let untidy = std::fs::read_to_string(root.join("untidy.csv")).unwrap();
        assert_eq!(untidy.trim_end(), report::csv::UNTIDY_COLUMNS.join(","));
        let cleaned = std::fs::read_to_string(root.join("cleaned.csv")).unwrap();
        assert_eq!(cleaned.trim_end(), report::csv::CLEANED_COLUMNS.join(","));
    }
}
