//! Source ingestion: one parameterized reader walks a source's files, remaps
//! raw headers onto the canonical schema, parses date columns permissively
//! and stamps every record with its provenance label.
//!
//! A missing directory (or missing sparql flat file) contributes zero
//! records; an unreadable or syntactically broken file is fatal.

pub mod sources;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use indicatif::{ProgressBar, ProgressStyle};

use crate::clean::dates;
use crate::models::Record;
use sources::{SourceLayout, SourceSpec, SOURCES};

/// Which of the known sources have any files under `root`.
pub fn detect_sources(root: &Path) -> Vec<&'static SourceSpec> {
    SOURCES
        .iter()
        .filter(|spec| match spec.layout {
            SourceLayout::CsvDirectory(dir) => root.join(dir).is_dir(),
            SourceLayout::FlatFile(file) => root.join(file).is_file(),
        })
        .collect()
}

/// Merge every record from the given sources, in table order, with a
/// progress bar over the discovered input files unless `quiet`.
pub fn ingest_all(
    root: &Path,
    specs: &[&'static SourceSpec],
    quiet: bool,
) -> Result<Vec<Record>> {
    let files: Vec<(&SourceSpec, PathBuf)> = specs
        .iter()
        .flat_map(|spec| {
            source_files(root, spec)
                .into_iter()
                .map(move |path| (*spec, path))
        })
        .collect();

    let pb = if !quiet && !files.is_empty() {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut records = Vec::new();
    for (spec, path) in files {
        if let Some(pb) = &pb {
            pb.set_message(path.display().to_string());
        }
        let file_records = read_csv_file(&path, spec)
            .with_context(|| format!("reading {}", path.display()))?;
        records.extend(file_records);
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    Ok(records)
}

/// Read every record for one source. Files are visited in sorted order so
/// output row order is reproducible across runs.
pub fn ingest_source(root: &Path, spec: &SourceSpec) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for path in source_files(root, spec) {
        let file_records = read_csv_file(&path, spec)
            .with_context(|| format!("reading {}", path.display()))?;
        records.extend(file_records);
    }
    Ok(records)
}

/// The CSV files backing one source, in sorted order. Missing layout → empty.
pub fn source_files(root: &Path, spec: &SourceSpec) -> Vec<PathBuf> {
    match spec.layout {
        SourceLayout::CsvDirectory(dir) => {
            let mut files = Vec::new();
            collect_csv_files(&root.join(dir), &mut files);
            files.sort();
            files
        }
        SourceLayout::FlatFile(file) => {
            let path = root.join(file);
            if path.is_file() {
                vec![path]
            } else {
                Vec::new()
            }
        }
    }
}

fn collect_csv_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return, // absent directory → no files
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_csv_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")) {
            out.push(path);
        }
    }
}

fn read_csv_file(path: &Path, spec: &SourceSpec) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    // Resolve each column to its canonical field name once, up front.
    let fields: Vec<String> = reader
        .headers()?
        .iter()
        .map(|header| canonical_field(spec, header.trim()).to_string())
        .collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new(spec.source);
        for (field, value) in fields.iter().zip(row.iter()) {
            let value = value.trim();
            if !value.is_empty() {
                assign_field(&mut record, field, value);
            }
        }
        records.push(record);
    }
    Ok(records)
}

fn canonical_field<'a>(spec: &SourceSpec, header: &'a str) -> &'a str {
    for (raw, canonical) in spec.renames {
        if header == *raw {
            return canonical;
        }
    }
    header
}

fn assign_field(record: &mut Record, field: &str, value: &str) {
    match field {
        "Title" => record.title = Some(value.to_string()),
        "OriginalTags" => record.original_tags = Some(value.to_string()),
        "ManualTags" => record.manual_tags = Some(value.to_string()),
        "Owner" => record.owner = Some(value.to_string()),
        "Description" => record.description = Some(value.to_string()),
        "DateCreated" => record.date_created = dates::parse_date(value),
        "DateUpdated" => record.date_updated = dates::parse_date(value),
        "PageURL" => record.page_url = Some(value.to_string()),
        "License" => record.licence = Some(value.to_string()),
        "FileType" => record.file_type = Some(value.to_string()),
        // Columns outside the canonical schema are ignored.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;
    use std::io::Write;

    fn spec_for(source: Source) -> &'static SourceSpec {
        SOURCES.iter().find(|s| s.source == source).unwrap()
    }

    fn write_file(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut f = fs::File::create(path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    #[test]
    fn test_ingest_ckan_directory() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(
            &tmp.path().join("ckan/export-1.csv"),
            "Title,Owner,DateCreated,DateUpdated,License,FileType\n\
             Bins,Dundee,2021-01-02,2021-02-03T10:00:00+00:00,uk-ogl,csv\n",
        );
        write_file(&tmp.path().join("ckan/notes.txt"), "not a csv");

        let records = ingest_source(tmp.path(), spec_for(Source::CkanApi)).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.source, Source::CkanApi);
        assert_eq!(r.title.as_deref(), Some("Bins"));
        assert_eq!(
            r.date_created,
            chrono::NaiveDate::from_ymd_opt(2021, 1, 2)
        );
        assert_eq!(
            r.date_updated,
            chrono::NaiveDate::from_ymd_opt(2021, 2, 3)
        );
    }

    #[test]
    fn test_ingest_sparql_renames_lowercase_headers() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(
            &tmp.path().join("scotgov-datasets-sparkql.csv"),
            "title,category,organization,notes,date_created,date_updated,url,licence\n\
             Schools,education,Scottish Government,All schools,2020-05-06,bad-date,http://x,OGL3\n",
        );

        let records = ingest_source(tmp.path(), spec_for(Source::Sparql)).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.source, Source::Sparql);
        assert_eq!(r.title.as_deref(), Some("Schools"));
        assert_eq!(r.original_tags.as_deref(), Some("education"));
        assert_eq!(r.owner.as_deref(), Some("Scottish Government"));
        assert_eq!(r.description.as_deref(), Some("All schools"));
        assert_eq!(r.page_url.as_deref(), Some("http://x"));
        assert_eq!(r.licence.as_deref(), Some("OGL3"));
        assert_eq!(
            r.date_created,
            chrono::NaiveDate::from_ymd_opt(2020, 5, 6)
        );
        // unparseable date coerces to absent, not an error
        assert_eq!(r.date_updated, None);
    }

    #[test]
    fn test_missing_layouts_yield_zero_records() {
        let tmp = tempfile::tempdir().unwrap();
        for spec in SOURCES {
            let records = ingest_source(tmp.path(), spec).unwrap();
            assert!(records.is_empty());
        }
        assert!(detect_sources(tmp.path()).is_empty());
    }

    #[test]
    fn test_detect_sources_finds_present_layouts() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(&tmp.path().join("ckan/a.csv"), "Title\nX\n");
        write_file(&tmp.path().join("dcat/b.csv"), "Title\nY\n");

        let found: Vec<Source> = detect_sources(tmp.path())
            .iter()
            .map(|s| s.source)
            .collect();
        assert_eq!(found, vec![Source::CkanApi, Source::DcatFeed]);
    }

    #[test]
    fn test_extra_columns_ignored_missing_cells_absent() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(
            &tmp.path().join("arcgis/a.csv"),
            "Title,Unknown,License\nRoads,zzz,\n",
        );

        let records = ingest_source(tmp.path(), spec_for(Source::ArcgisApi)).unwrap();
        let r = &records[0];
        assert_eq!(r.title.as_deref(), Some("Roads"));
        assert_eq!(r.licence, None);
        assert_eq!(r.owner, None);
    }

    #[test]
    fn test_undecodable_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ckan/bad.csv");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(b"Title,Owner\n\xff\xfe,broken\n").unwrap();

        assert!(ingest_source(tmp.path(), spec_for(Source::CkanApi)).is_err());
    }
}
