/// Known licence URLs, names and abbreviations mapped to one canonical label.
const KNOWN_LICENCES: &[(&str, &str)] = &[
    (
        "https://creativecommons.org/licenses/by-sa/3.0/",
        "Creative Commons Attribution Share-Alike 3.0",
    ),
    (
        "https://creativecommons.org/licenses/by/4.0/legalcode",
        "Creative Commons Attribution 4.0 International",
    ),
    (
        "https://creativecommons.org/licenses/by/4.0",
        "Creative Commons Attribution 4.0 International",
    ),
    (
        "Creative Commons Attribution 4.0",
        "Creative Commons Attribution 4.0 International",
    ),
    (
        "https://creativecommons.org/share-your-work/public-domain/cc0",
        "Creative Commons CC0",
    ),
    (
        "https://rightsstatements.org/page/NoC-NC/1.0/",
        "Non-Commercial Use Only",
    ),
    (
        "https://opendatacommons.org/licenses/odbl/1-0/",
        "Open Data Commons Open Database License 1.0",
    ),
    (
        "Open Data Commons Open Database License 1.0",
        "Open Data Commons Open Database License 1.0",
    ),
    (
        "https://www.nationalarchives.gov.uk/doc/open-government-licence/version/2/",
        "Open Government Licence v2.0",
    ),
    (
        "https://www.nationalarchives.gov.uk/doc/open-government-licence/version/3/",
        "Open Government Licence v3.0",
    ),
    (
        "Open Government Licence 3.0 (United Kingdom)",
        "Open Government Licence v3.0",
    ),
    ("UK Open Government Licence (OGL)", "Open Government Licence v3.0"),
    ("Open Government", "Open Government Licence v3.0"),
    ("uk-ogl", "Open Government Licence v3.0"),
    ("OGL3", "Open Government Licence v3.0"),
    ("https://rightsstatements.org/vocab/NKC/1.0/", "No Known Copyright"),
    ("https://creativecommons.org/publicdomain/mark/1.0/", "Public Domain"),
    ("Other (Public Domain)", "Public Domain"),
    ("Public Domain", "Public Domain"),
    (
        "Public Sector End User Licence (Scotland)",
        "Public Sector End User Licence (Scotland)",
    ),
];

/// Comparison key: case-insensitive, stripped of surrounding spaces and
/// slashes so `.../by/4.0` and `.../by/4.0/` compare equal.
fn key(raw: &str) -> String {
    raw.trim_matches(|c| c == ' ' || c == '/').to_lowercase()
}

/// Canonicalize a licence string. Unmatched non-empty values are labelled
/// `Custom licence: <original>`; absent values become `No licence`.
pub fn normalize(licence: Option<&str>) -> String {
    let raw = match licence {
        Some(s) if !s.trim().is_empty() => s,
        _ => return "No licence".to_string(),
    };

    let wanted = key(raw);
    for (variant, canonical) in KNOWN_LICENCES {
        if key(variant) == wanted {
            return (*canonical).to_string();
        }
    }

    format!("Custom licence: {}", raw)
}
