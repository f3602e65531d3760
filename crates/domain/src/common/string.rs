//! String conversion utilities.

/// Returns true if the string is empty or whitespace-only.
///
/// # Examples
///
/// ```
/// use promovote_domain::common::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank("SAVE20"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Converts a blank string to `None`, otherwise returns the trimmed value.
///
/// Useful when mapping free-text form fields onto optional entity
/// attributes.
///
/// # Examples
///
/// ```
/// use promovote_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  20% off pizza  "), Some("20% off pizza".to_string()));
/// assert_eq!(none_if_blank("   "), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
