//! Form data store
//!
//! Decides whether the current request's submission comes from the live
//! request or from the session cache (a submission parked before an auth
//! redirect), and owns moving submissions in and out of the cache.

use crate::error::{Error, Result};
use crate::session::SessionCache;
use crate::types::{FieldValue, Submission, Upload};

/// Resolves the effective submission for one request
pub struct FormStore<'a> {
    cache: &'a dyn SessionCache,
}

impl<'a> FormStore<'a> {
    /// Create a store over the request's session cache
    pub const fn new(cache: &'a dyn SessionCache) -> Self {
        Self { cache }
    }

    /// The submission this request should act on
    ///
    /// A cached submission wins outright; the live request's fields are
    /// ignored while one is parked. Upload fields coming out of the cache
    /// are hydrated with their stored bytes (missing bytes resolve to empty
    /// content). A blob that does not parse is [`Error::MalformedCache`] -
    /// callers treat that as "no submission" and re-render the form.
    pub fn resolve(&self, live: Submission) -> Result<Submission> {
        match self.cache.cached_submission() {
            Some(blob) => {
                let cached = Submission::from_json(&blob)
                    .map_err(|e| Error::MalformedCache(e.to_string()))?;
                Ok(self.hydrate(&cached))
            }
            None => Ok(live),
        }
    }

    /// Park a submission across the auth redirect
    ///
    /// Upload bytes go into the upload store keyed by field name; the blob
    /// itself carries only the filenames.
    pub fn cache(&self, submission: &Submission) -> Result<()> {
        for (name, value) in submission.fields() {
            if let FieldValue::Upload(upload) = value {
                self.cache.set_upload_content(name, &upload.content);
            }
        }

        let blob = submission
            .to_json()
            .map_err(|e| Error::Internal(format!("cannot serialize submission: {e}")))?;
        self.cache.set_cached_submission(blob);
        Ok(())
    }

    /// Drop the parked submission and its upload bytes
    pub fn clear(&self) {
        self.cache.clear_cached_submission();
    }

    fn hydrate(&self, submission: &Submission) -> Submission {
        let mut hydrated = Submission::new();
        for (name, value) in submission.fields() {
            let value = match value {
                FieldValue::Upload(upload) => {
                    let content = self.cache.upload_content(name).unwrap_or_default();
                    FieldValue::Upload(Upload::new(upload.filename.clone(), content))
                }
                other => other.clone(),
            };
            hydrated.insert(name, value);
        }
        hydrated
    }
}
