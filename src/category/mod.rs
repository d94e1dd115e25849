//! Keyword-based ODS categorisation.
//!
//! A static table ([`keywords::ODS_CATEGORIES`]) maps each category label to
//! its known keyword set. Every tag in a record's combined tag string is
//! tested against every category's list; exact membership adds that category
//! to the result. One tag can trigger several categories, and a record can
//! end up with several labels. No stemming, no substring matching.

pub mod keywords;

use std::collections::BTreeSet;

use keywords::ODS_CATEGORIES;

/// Fallback label when no tag matches any category's keyword list.
pub const UNCATEGORISED: &str = "Uncategorised";

/// Assign ODS categories to a semicolon-delimited combined tag string.
///
/// Returns a semicolon-joined, deduplicated label set; order within the
/// result is not significant (sorted here for stable output).
pub fn classify(combined_tags: &str) -> String {
    let mut applied: BTreeSet<&str> = BTreeSet::new();

    for tag in combined_tags.split(';') {
        for (category, keywords) in ODS_CATEGORIES {
            if keywords.contains(&tag) {
                applied.insert(*category);
            }
        }
    }

    if applied.is_empty() {
        return UNCATEGORISED.to_string();
    }

    applied.into_iter().collect::<Vec<_>>().join(";")
}
