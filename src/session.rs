//! Session cache collaborator interface
//!
//! A submission that arrives before the user has authenticated is parked
//! here, the user is redirected to the OAuth flow, and the resumed request
//! picks the submission back up. The actual store (cookie session, Redis,
//! memcache) lives with the HTTP layer; this crate only depends on the
//! narrow [`SessionCache`] seam.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::collections::HashMap;
use std::sync::Mutex;

/// Cache scope bridging one submission across the auth redirect
///
/// The submission blob and its upload bytes live and die together: clearing
/// the submission drops the uploads too.
pub trait SessionCache: Send + Sync {
    /// The parked submission blob, if any
    fn cached_submission(&self) -> Option<String>;

    /// Park a submission blob
    fn set_cached_submission(&self, blob: String);

    /// Drop the parked submission and all cached upload content
    fn clear_cached_submission(&self);

    /// Raw bytes cached for an upload field
    fn upload_content(&self, field: &str) -> Option<Vec<u8>>;

    /// Cache raw bytes for an upload field
    fn set_upload_content(&self, field: &str, content: &[u8]);
}

/// In-memory session cache
///
/// Values are kept as strings (upload bytes base64-encoded), the same shape
/// a string-valued session store imposes.
#[derive(Debug, Default)]
pub struct MemorySessionCache {
    submission: Mutex<Option<String>>,
    uploads: Mutex<HashMap<String, String>>,
}

impl MemorySessionCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionCache for MemorySessionCache {
    fn cached_submission(&self) -> Option<String> {
        self.submission.lock().unwrap().clone()
    }

    fn set_cached_submission(&self, blob: String) {
        *self.submission.lock().unwrap() = Some(blob);
    }

    fn clear_cached_submission(&self) {
        *self.submission.lock().unwrap() = None;
        self.uploads.lock().unwrap().clear();
    }

    fn upload_content(&self, field: &str) -> Option<Vec<u8>> {
        let uploads = self.uploads.lock().unwrap();
        let encoded = uploads.get(field)?;
        BASE64.decode(encoded).ok()
    }

    fn set_upload_content(&self, field: &str, content: &[u8]) {
        self.uploads
            .lock()
            .unwrap()
            .insert(field.to_string(), BASE64.encode(content));
    }
}
