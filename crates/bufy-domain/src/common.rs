//! Helpers shared by the budgeting primitives.

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Replaces missing or non-finite amounts with zero.
pub fn or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Lowercases a field or category name and strips spaces, `_` and `-`.
pub(crate) fn normalize_name(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
