/// Known MIME types, extensions and platform labels mapped to a canonical
/// file-type label.
const KNOWN_FILE_TYPES: &[(&str, &str)] = &[
    ("application/x-7z-compressed", "7-Zip compressed file"),
    ("ArcGIS GeoServices REST API", "ARCGIS GEOSERVICE"),
    ("Esri REST", "ARCGIS GEOSERVICE"),
    ("Atom Feed", "ATOM FEED"),
    ("htm", "HTML"),
    ("ics", "iCalendar"),
    ("jpeg", "Image"),
    ("vnd.openxmlformats-officedocument.spreadsheetml.sheet", "MS EXCEL"),
    ("vnd.ms-excel", "MS EXCEL"),
    ("xls", "MS EXCEL"),
    ("xlsx", "MS EXCEL"),
    ("doc", "MS Word"),
    ("docx", "MS Word"),
    ("QGIS", "QGIS Shapefile"),
    ("text", "TXT"),
    ("web", "URL"),
    ("UK/DATA/#TABGB1900", "URL"),
    ("UK/ROY/GAZETTEER/#DOWNLOAD", "URL"),
    ("Web Mapping Application", "WEB MAP"),
    ("mets", "XML"),
    ("alto", "XML"),
];

/// Comparison key: case-insensitive, stripped of surrounding dots, slashes
/// and spaces so `.xlsx`, `xlsx` and `xlsx/` compare equal.
fn key(raw: &str) -> String {
    raw.trim_matches(|c| c == '.' || c == ' ' || c == '/').to_lowercase()
}

/// Canonicalize a file-type string. Unmatched non-empty values are trimmed
/// and uppercased; absent or empty values become `No file type`.
pub fn normalize(file_type: Option<&str>) -> String {
    let raw = match file_type {
        Some(s) if !s.trim().is_empty() => s,
        _ => return "No file type".to_string(),
    };

    let wanted = key(raw);
    for (variant, canonical) in KNOWN_FILE_TYPES {
        if key(variant) == wanted {
            return (*canonical).to_string();
        }
    }

    raw.trim_matches(|c| c == '.' || c == ' ' || c == '/').to_uppercase()
}
