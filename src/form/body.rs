//! Issue/pull-request body rendering
//!
//! The body is a Markdown bullet list of the submission's free-form fields.
//! Reserved fields (`title`, `labels`), uploads, empty values, and fields
//! excluded by convention never appear.

use crate::types::{FieldValue, Submission};

/// Fields that are form plumbing, not content
const EXCLUDED_FIELDS: &[&str] = &["title", "g-recaptcha-response"];

/// Render the submission body
///
/// One `* **Name**: value` bullet per remaining text field, joined with
/// newlines, in field order.
#[must_use]
pub fn render_body(submission: &Submission) -> String {
    submission
        .fields()
        .filter_map(|(name, value)| {
            if EXCLUDED_FIELDS.contains(&name) {
                return None;
            }
            match value {
                FieldValue::Text(text) if !text.is_empty() => {
                    Some(format!("* **{}**: {text}", humanize(name)))
                }
                FieldValue::Text(_) | FieldValue::Labels(_) | FieldValue::Upload(_) => None,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn a field name into a label: underscores and hyphens become spaces,
/// the first letter of the phrase is uppercased (only the leading word)
#[must_use]
pub fn humanize(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
