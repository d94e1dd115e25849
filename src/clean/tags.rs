use std::collections::BTreeSet;

/// Tidy a delimited tag string: commas become semicolons, every element is
/// lowercased and trimmed, empty and `"nan"` elements are dropped, and the
/// result carries no trailing delimiter.
///
/// Total over any input; an absent value tidies to the empty string.
pub fn tidy(tags: Option<&str>) -> String {
    let raw = match tags {
        Some(s) => s.replace(',', ";"),
        None => return String::new(),
    };

    raw.split(';')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty() && tag != "nan")
        .collect::<Vec<_>>()
        .join(";")
}

/// Union of two tidied tag strings, deduplicated by exact string match.
///
/// Both inputs must already be tidied (lowercase, semicolon-delimited);
/// dedup here is exact — no fuzzy matching. The result is sorted so output
/// files are stable across runs.
pub fn combine(original: &str, manual: &str) -> String {
    let mut tags: BTreeSet<&str> = BTreeSet::new();
    for tag in original.split(';').chain(manual.split(';')) {
        if !tag.is_empty() {
            tags.insert(tag);
        }
    }
    tags.into_iter().collect::<Vec<_>>().join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tidy_mixed_delimiters() {
        assert_eq!(tidy(Some("a,b;;c")), "a;b;c");
    }

    #[test]
    fn test_tidy_lowercases_and_trims() {
        assert_eq!(tidy(Some("Cycling; Bus ")), "cycling;bus");
    }

    #[test]
    fn test_tidy_drops_nan_and_trailing_delimiter() {
        assert_eq!(tidy(Some("roads;nan;")), "roads");
    }

    #[test]
    fn test_tidy_empty_and_absent() {
        assert_eq!(tidy(Some("")), "");
        assert_eq!(tidy(None), "");
    }

    #[test]
    fn test_combine_dedups_union() {
        let combined = combine("a;b", "b;c");
        let set: std::collections::BTreeSet<&str> = combined.split(';').collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains("a") && set.contains("b") && set.contains("c"));
        // each element exactly once
        assert_eq!(combined.split(';').count(), 3);
    }

    #[test]
    fn test_combine_one_side_empty() {
        assert_eq!(combine("bus;cycling", ""), "bus;cycling");
        assert_eq!(combine("", ""), "");
    }
}
