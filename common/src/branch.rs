//! Branch code lookup

/// Branch codes the service can report, with their display names
pub const BRANCHES: &[(&str, &str)] = &[
    ("CS", "Computer Science"),
    ("EC", "Electronics & Communication"),
    ("ME", "Mechanical"),
    ("CV", "Civil"),
    ("EE", "Electrical"),
    ("IS", "Information Science"),
    ("AD", "Aerospace"),
    ("BT", "Biotechnology"),
    ("CH", "Chemical"),
];

/// Display name for a branch code; unknown codes come back unchanged
pub fn branch_full_name(code: &str) -> &str {
    BRANCHES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(branch_full_name("CS"), "Computer Science");
        assert_eq!(branch_full_name("EC"), "Electronics & Communication");
        assert_eq!(branch_full_name("CH"), "Chemical");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(branch_full_name("XX"), "XX");
        assert_eq!(branch_full_name(""), "");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(branch_full_name("cs"), "cs");
    }
}
