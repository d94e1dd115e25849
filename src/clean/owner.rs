/// Known owner-name variants mapped to one canonical organisation name.
const OWNER_RENAMES: &[(&str, &str)] = &[
    ("Aberdeen", "Aberdeen City Council"),
    ("Dundee", "Dundee City Council"),
    ("Perth", "Perth and Kinross Council"),
    ("Stirling", "Stirling Council"),
    ("Angus", "Angus Council"),
    ("open.data@southayrshire", "South Ayrshire Council"),
    ("SEPA", "Scottish Environment Protection Agency"),
    ("South Ayrshire", "South Ayrshire Council"),
    ("East Ayrshire", "East Ayrshire Council"),
    ("Highland Council GIS Organisation", "Highland Council"),
    ("Scottish.Forestry", "Scottish Forestry"),
    ("Na h-Eileanan an Iar", "Comhairle nan Eilean Siar"),
];

/// Canonicalize an owner name by exact-match substitution. Names with no
/// entry in the rename table pass through unchanged.
pub fn canonicalize(owner: &str) -> String {
    for (variant, canonical) in OWNER_RENAMES {
        if owner == *variant {
            return (*canonical).to_string();
        }
    }
    owner.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_variant() {
        assert_eq!(canonicalize("Aberdeen"), "Aberdeen City Council");
        assert_eq!(canonicalize("SEPA"), "Scottish Environment Protection Agency");
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(canonicalize("Glasgow City Council"), "Glasgow City Council");
    }

    #[test]
    fn test_idempotent() {
        for (variant, _) in OWNER_RENAMES {
            let once = canonicalize(variant);
            assert_eq!(canonicalize(&once), once);
        }
    }
}
