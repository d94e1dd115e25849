use crate::models::Source;

/// How a source lays its export out under the data root.
#[derive(Debug, Clone, Copy)]
pub enum SourceLayout {
    /// A directory of CSV files, walked recursively; non-CSV files skipped.
    CsvDirectory(&'static str),
    /// One flat CSV file. Absent file contributes zero records.
    FlatFile(&'static str),
}

/// Everything the parameterized reader needs for one source: where the files
/// live, how raw headers map onto the canonical schema, and which provenance
/// label to stamp on every record.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub source: Source,
    pub layout: SourceLayout,
    /// Raw header → canonical field, applied 1:1 before the merge. Headers
    /// already canonical need no entry.
    pub renames: &'static [(&'static str, &'static str)],
}

/// The sparql export uses lowercase field names throughout.
const SPARQL_RENAMES: &[(&str, &str)] = &[
    ("title", "Title"),
    ("category", "OriginalTags"),
    ("organization", "Owner"),
    ("notes", "Description"),
    ("date_created", "DateCreated"),
    ("date_updated", "DateUpdated"),
    ("url", "PageURL"),
    ("licence", "License"),
];

/// The fixed source set, in merge order. Output row order follows this.
pub const SOURCES: &[SourceSpec] = &[
    SourceSpec {
        source: Source::CkanApi,
        layout: SourceLayout::CsvDirectory("ckan"),
        renames: &[],
    },
    SourceSpec {
        source: Source::ArcgisApi,
        layout: SourceLayout::CsvDirectory("arcgis"),
        renames: &[],
    },
    SourceSpec {
        source: Source::UsmartApi,
        layout: SourceLayout::CsvDirectory("USMART"),
        renames: &[],
    },
    SourceSpec {
        source: Source::Sparql,
        layout: SourceLayout::FlatFile("scotgov-datasets-sparkql.csv"),
        renames: SPARQL_RENAMES,
    },
    SourceSpec {
        source: Source::DcatFeed,
        layout: SourceLayout::CsvDirectory("dcat"),
        renames: &[],
    },
    SourceSpec {
        source: Source::WebScraped,
        layout: SourceLayout::CsvDirectory("scraped-results"),
        renames: &[],
    },
];
