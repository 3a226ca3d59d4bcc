//! Test data factories for intake types
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use intake::types::{FieldValue, Submission, Upload};

/// Build a submission from text field pairs, in order
pub fn make_submission(fields: &[(&str, &str)]) -> Submission {
    let mut submission = Submission::new();
    for (name, value) in fields {
        submission.insert(*name, (*value).into());
    }
    submission
}

/// Attach an upload field to a submission
pub fn add_upload(submission: &mut Submission, field: &str, filename: &str, content: &[u8]) {
    submission.insert(
        field,
        FieldValue::Upload(Upload::new(filename, content.to_vec())),
    );
}

/// Set the reserved labels field
pub fn add_labels(submission: &mut Submission, labels: &[&str]) {
    submission.insert(
        "labels",
        FieldValue::Labels(labels.iter().map(ToString::to_string).collect()),
    );
}
