//! Field-level cleaning applied after the merge: owner canonicalisation, tag
//! tidying and combination, ODS categorisation, licence and file-type
//! normalisation. Every transform here is a pure, total mapping over one
//! record or field; nothing in this pass can fail.

pub mod dates;
pub mod filetype;
pub mod licence;
pub mod owner;
pub mod tags;

use crate::category;
use crate::models::Record;

/// Clean all records in place.
pub fn clean_records(records: &mut [Record]) {
    for record in records.iter_mut() {
        if let Some(name) = record.owner.as_deref() {
            record.owner = Some(owner::canonicalize(name));
        }

        let original = tags::tidy(record.original_tags.as_deref());
        let manual = tags::tidy(record.manual_tags.as_deref());
        let combined = tags::combine(&original, &manual);

        record.ods_categories = Some(category::classify(&combined));
        record.original_tags = Some(original);
        record.manual_tags = Some(manual);
        record.combined_tags = Some(combined);

        record.licence = Some(licence::normalize(record.licence.as_deref()));
        record.file_type = Some(filetype::normalize(record.file_type.as_deref()));

        // AssetStatus is a placeholder column; always written empty.
        record.asset_status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Source;

    fn record() -> Record {
        Record::new(Source::CkanApi)
    }

    #[test]
    fn test_clean_fills_fallbacks_on_empty_record() {
        let mut records = vec![record()];
        clean_records(&mut records);

        let r = &records[0];
        assert_eq!(r.original_tags.as_deref(), Some(""));
        assert_eq!(r.manual_tags.as_deref(), Some(""));
        assert_eq!(r.combined_tags.as_deref(), Some(""));
        assert_eq!(r.ods_categories.as_deref(), Some("Uncategorised"));
        assert_eq!(r.licence.as_deref(), Some("No licence"));
        assert_eq!(r.file_type.as_deref(), Some("No file type"));
        assert!(r.asset_status.is_none());
    }

    #[test]
    fn test_clean_combines_and_categorises() {
        let mut r = record();
        r.original_tags = Some("Cycling;Bus".to_string());
        let mut records = vec![r];
        clean_records(&mut records);

        let r = &records[0];
        let combined: std::collections::BTreeSet<&str> =
            r.combined_tags.as_deref().unwrap().split(';').collect();
        assert_eq!(combined, ["bus", "cycling"].into_iter().collect());
        assert!(r.ods_categories.as_deref().unwrap().contains("Transportation"));
    }

    #[test]
    fn test_clean_canonicalises_owner() {
        let mut r = record();
        r.owner = Some("Dundee".to_string());
        let mut records = vec![r];
        clean_records(&mut records);
        assert_eq!(records[0].owner.as_deref(), Some("Dundee City Council"));
    }

    #[test]
    fn test_clean_labels_custom_licence() {
        let mut r = record();
        r.licence = Some("SomeRandomLicense".to_string());
        let mut records = vec![r];
        clean_records(&mut records);
        assert_eq!(
            records[0].licence.as_deref(),
            Some("Custom licence: SomeRandomLicense")
        );
    }
}
