use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dataset-catalogue entry in the canonical schema.
///
/// Optional fields stay `None` when the source export has no value; the
/// cleaning pass replaces them with the documented fallback labels
/// (`No licence`, `No file type`, empty tag strings). `CombinedTags` and
/// `ODSCategories` are derived during cleaning and are `None` before it runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "OriginalTags")]
    pub original_tags: Option<String>,
    #[serde(rename = "ManualTags")]
    pub manual_tags: Option<String>,
    #[serde(rename = "CombinedTags")]
    pub combined_tags: Option<String>,
    #[serde(rename = "ODSCategories")]
    pub ods_categories: Option<String>,
    #[serde(rename = "Owner")]
    pub owner: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "DateCreated")]
    pub date_created: Option<NaiveDate>,
    #[serde(rename = "DateUpdated")]
    pub date_updated: Option<NaiveDate>,
    #[serde(rename = "PageURL")]
    pub page_url: Option<String>,
    #[serde(rename = "License")]
    pub licence: Option<String>,
    #[serde(rename = "FileType")]
    pub file_type: Option<String>,
    #[serde(rename = "Source")]
    pub source: Source,
    /// Reserved for future use; always absent.
    #[serde(rename = "AssetStatus")]
    pub asset_status: Option<String>,
}

impl Record {
    pub fn new(source: Source) -> Self {
        Record {
            title: None,
            original_tags: None,
            manual_tags: None,
            combined_tags: None,
            ods_categories: None,
            owner: None,
            description: None,
            date_created: None,
            date_updated: None,
            page_url: None,
            licence: None,
            file_type: None,
            source,
            asset_status: None,
        }
    }
}

/// Which origin system a record came from. The serialized labels are part of
/// the output format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "ckan API")]
    CkanApi,
    #[serde(rename = "sparql")]
    Sparql,
    #[serde(rename = "arcgis API")]
    ArcgisApi,
    #[serde(rename = "USMART API")]
    UsmartApi,
    #[serde(rename = "DCAT feed")]
    DcatFeed,
    #[serde(rename = "Web Scraped")]
    WebScraped,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::CkanApi => write!(f, "ckan API"),
            Source::Sparql => write!(f, "sparql"),
            Source::ArcgisApi => write!(f, "arcgis API"),
            Source::UsmartApi => write!(f, "USMART API"),
            Source::DcatFeed => write!(f, "DCAT feed"),
            Source::WebScraped => write!(f, "Web Scraped"),
        }
    }
}
