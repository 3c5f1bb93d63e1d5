//! Class-name helpers.

/// Join class fragments with single spaces, skipping empty ones.
///
/// ```rust
/// use ecoinlink_site::classes::class_names;
///
/// assert_eq!(class_names(&["card", "", "bg-chart-1"]), "card bg-chart-1");
/// ```
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `base` plus `extra` when `enabled`.
pub fn class_if(base: &str, enabled: bool, extra: &str) -> String {
    class_names(&[base, if enabled { extra } else { "" }])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_empty_and_whitespace_fragments() {
        assert_eq!(class_names(&["a", " ", "", "b "]), "a b");
        assert_eq!(class_names(&[]), "");
    }

    #[test]
    fn conditional_fragment() {
        assert_eq!(class_if("nav-link", true, "active"), "nav-link active");
        assert_eq!(class_if("nav-link", false, "active"), "nav-link");
    }
}
