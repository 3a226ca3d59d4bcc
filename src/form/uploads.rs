//! Upload extraction

use crate::types::{FieldValue, Submission, Upload};

/// The submission's upload fields, in field order
///
/// A field qualifies iff its value is the upload variant; text and label
/// fields never do. The order is the submission's own field order, so two
/// calls on the same submission always agree - pull-request creation relies
/// on that for deterministic commit ordering.
#[must_use]
pub fn uploads(submission: &Submission) -> Vec<(&str, &Upload)> {
    submission
        .fields()
        .filter_map(|(name, value)| match value {
            FieldValue::Upload(upload) => Some((name, upload)),
            FieldValue::Text(_) | FieldValue::Labels(_) => None,
        })
        .collect()
}
