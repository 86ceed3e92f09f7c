//! Output filename sanitization.

use regex::Regex;

/// Fixed prefix applied to every exported artifact name.
pub const NAME_PREFIX: &str = "PRD_";

/// Derive a safe, normalized base name from a source document filename.
///
/// The last extension is stripped (split at the final `.`), every
/// maximal run of characters outside `[A-Za-z0-9]` collapses to a single
/// `_`, leading and trailing underscores are trimmed, and the `PRD_`
/// prefix is prepended. The result contains no whitespace and no
/// repeated underscores.
///
/// # Example
///
/// ```
/// assert_eq!(prdoc::sanitize("My File (v2).md"), "PRD_My_File_v2");
/// assert_eq!(prdoc::sanitize("a---b.docx"), "PRD_a_b");
/// ```
pub fn sanitize(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };
    let re = Regex::new(r"[^A-Za-z0-9]+").unwrap();
    let collapsed = re.replace_all(stem, "_");
    format!("{}{}", NAME_PREFIX, collapsed.trim_matches('_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_spaces_and_punctuation() {
        assert_eq!(sanitize("My File (v2).md"), "PRD_My_File_v2");
    }

    #[test]
    fn test_sanitize_collapses_runs() {
        assert_eq!(sanitize("a---b.docx"), "PRD_a_b");
    }

    #[test]
    fn test_sanitize_strips_last_extension_only() {
        assert_eq!(sanitize("report.final.md"), "PRD_report_final");
    }

    #[test]
    fn test_sanitize_no_extension() {
        assert_eq!(sanitize("plain"), "PRD_plain");
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        assert_eq!(sanitize("spec v1.2.md"), sanitize("spec v1.2.md"));
    }

    #[test]
    fn test_sanitize_never_repeats_underscores() {
        let name = sanitize("a  b__c--d (e).txt");
        assert!(!name.contains("__"));
        assert!(!name.contains(' '));
        assert_eq!(name, "PRD_a_b_c_d_e");
    }
}
