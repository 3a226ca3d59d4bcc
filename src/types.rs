//! Core types for intake

use crate::error::Error;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A file attached to a submission
///
/// Only the filename is part of the serialized submission; the raw bytes
/// travel through the session cache's upload store, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    /// Name the file will be committed under
    pub filename: String,
    /// Raw file content (empty until hydrated from the upload store when the
    /// submission comes out of the cache)
    #[serde(skip_serializing, default)]
    pub content: Vec<u8>,
}

impl Upload {
    /// Create an upload from a filename and raw content
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// One form field's value
///
/// A JSON object carrying a `filename` is an upload, an array of strings is
/// a label list, a plain string is text. Anything else fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A file upload
    Upload(Upload),
    /// An ordered list of label strings (the reserved `labels` field)
    Labels(Vec<String>),
    /// A plain text field
    Text(String),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One user-filled form's field values
///
/// Field names are unique (a later insert replaces the earlier value) and
/// iteration follows insertion order, which keeps upload extraction and body
/// rendering deterministic across calls. Serializes as a JSON object in
/// field order; deserializing preserves the blob's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    fields: Vec<(String, FieldValue)>,
}

impl Submission {
    /// Create an empty submission
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Whether the submission has no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Set a field, replacing any existing value under the same name
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        let name = name.into();
        if let Some(existing) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    /// Look up a field by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// The reserved `title` field, if present as text
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self.get("title") {
            Some(FieldValue::Text(title)) => Some(title),
            _ => None,
        }
    }

    /// The reserved `labels` field; empty when absent
    #[must_use]
    pub fn labels(&self) -> &[String] {
        match self.get("labels") {
            Some(FieldValue::Labels(labels)) => labels,
            _ => &[],
        }
    }

    /// Iterate fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Parse a submission from a serialized blob
    pub fn from_json(blob: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(blob)
    }

    /// Serialize the submission to a cacheable blob
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl Serialize for Submission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Submission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Submission;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Submission, A::Error> {
                let mut submission = Submission::new();
                while let Some((name, value)) = access.next_entry::<String, FieldValue>()? {
                    submission.insert(name, value);
                }
                Ok(submission)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

/// A branch as reported by the repository service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Commit SHA the branch currently points at
    pub head_sha: String,
}

/// A created issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Web URL for the issue
    pub html_url: String,
}

/// A created pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// The target repository, `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl FromStr for RepoTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(Error::Parse(format!(
                "expected repository as owner/name, got: {s}"
            ))),
        }
    }
}

impl fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The credential acting for one request
#[derive(Debug, Clone)]
pub enum Credential {
    /// The shared anonymous-mode token configured for the deployment
    Shared(String),
    /// A token belonging to the authenticated user
    User(String),
}

/// Per-request identity, resolved by the excluded HTTP/auth layer
///
/// The orchestrator never performs authentication; it is handed the already
/// resolved credential and only cares whether anonymous mode is active.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The resolved credential
    pub credential: Credential,
}

impl RequestContext {
    /// Context for anonymous mode (shared deployment token)
    pub fn anonymous(token: impl Into<String>) -> Self {
        Self {
            credential: Credential::Shared(token.into()),
        }
    }

    /// Context for an authenticated user's own token
    pub fn user(token: impl Into<String>) -> Self {
        Self {
            credential: Credential::User(token.into()),
        }
    }

    /// Whether the shared anonymous credential is acting
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self.credential, Credential::Shared(_))
    }

    /// The token to call the repository with
    #[must_use]
    pub fn token(&self) -> &str {
        match &self.credential {
            Credential::Shared(token) | Credential::User(token) => token,
        }
    }
}
