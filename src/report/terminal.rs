use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::category::UNCATEGORISED;
use crate::ingest::sources::SOURCES;
use crate::models::Record;

/// Render a colored terminal summary of the cleaned output.
pub fn render(records: &[Record], root: &Path, verbose: bool, quiet: bool) -> Result<()> {
    let total = records.len();
    let uncategorised = records
        .iter()
        .filter(|r| r.ods_categories.as_deref() == Some(UNCATEGORISED))
        .count();
    let categorised = total - uncategorised;
    let no_licence = records
        .iter()
        .filter(|r| r.licence.as_deref() == Some("No licence"))
        .count();

    if quiet {
        println!(
            "Total: {}  Categorised: {}  Uncategorised: {}  No licence: {}",
            total,
            categorised.to_string().green(),
            uncategorised.to_string().yellow(),
            no_licence.to_string().red(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "catalog-mergr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Data root: {}\n", root.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Total datasets     : {}", total));
    println!(
        " │  {:<48} │",
        format!("{}  Categorised     : {:>5}  {}", "✓".green(), categorised, top_categories(records))
    );
    println!(
        " │  {:<48} │",
        format!("{}  Uncategorised   : {:>5}", "⚠".yellow(), uncategorised)
    );
    println!(
        " │  {:<48} │",
        format!("{}  Without licence : {:>5}", "✗".red(), no_licence)
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    println!(" Datasets per source:\n");
    render_source_table(records);
    println!();

    if verbose {
        println!(" Licence breakdown:\n");
        render_licence_table(records);
        println!();
    }

    Ok(())
}

fn render_source_table(records: &[Record]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Source").add_attribute(Attribute::Bold),
            Cell::new("Datasets").add_attribute(Attribute::Bold),
        ]);

    for spec in SOURCES {
        let count = records.iter().filter(|r| r.source == spec.source).count();
        table.add_row(vec![
            Cell::new(spec.source.to_string()),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

fn render_licence_table(records: &[Record]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.licence.as_deref().unwrap_or("No licence")).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Licence").add_attribute(Attribute::Bold),
            Cell::new("Datasets").add_attribute(Attribute::Bold),
        ]);

    for (licence, count) in pairs {
        table.add_row(vec![
            Cell::new(licence),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{}", table);
}

/// The three most common categories, rendered like `[Transportation (12), …]`.
fn top_categories(records: &[Record]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        let Some(categories) = r.ods_categories.as_deref() else {
            continue;
        };
        for category in categories.split(';') {
            if category != UNCATEGORISED {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(category, count)| format!("{} ({})", category, count))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
