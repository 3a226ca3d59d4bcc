//! Mock repository service for testing
//!
//! These are test utilities - not all may be used in current tests but are
//! available for future test development.

#![allow(dead_code)]

use async_trait::async_trait;
use intake::error::{Error, Result};
use intake::repo::RepoService;
use intake::types::{Branch, Issue, PullRequest, RepoTarget};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call record for `create_ref`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRefCall {
    pub branch: String,
    pub sha: String,
}

/// Call record for `put_file`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutFileCall {
    pub path: String,
    pub message: String,
    pub content: Vec<u8>,
    pub branch: String,
}

/// Call record for `create_issue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIssueCall {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Call record for `create_pull_request`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePrCall {
    pub base: String,
    pub head: String,
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

/// Recording mock repository service
///
/// Features:
/// - Configurable branch list, default branch, and visibility
/// - Auto-incrementing issue/PR numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockRepoService {
    target: RepoTarget,
    default_branch: Mutex<String>,
    branches: Mutex<Vec<Branch>>,
    private: Mutex<bool>,
    next_number: AtomicU64,
    // Call tracking
    list_branches_calls: AtomicU64,
    default_branch_calls: AtomicU64,
    is_private_calls: AtomicU64,
    create_ref_calls: Mutex<Vec<CreateRefCall>>,
    put_file_calls: Mutex<Vec<PutFileCall>>,
    create_issue_calls: Mutex<Vec<CreateIssueCall>>,
    create_pr_calls: Mutex<Vec<CreatePrCall>>,
    // Error injection
    error_on_create_ref: Mutex<Option<String>>,
    error_on_put_file: Mutex<Option<(usize, String)>>,
    error_on_create_issue: Mutex<Option<String>>,
    error_on_create_pr: Mutex<Option<String>>,
    error_on_is_private: Mutex<Option<String>>,
}

impl MockRepoService {
    /// Create a mock with a single `master` branch and a public repository
    pub fn new() -> Self {
        Self {
            target: "testowner/testrepo".parse().expect("valid test target"),
            default_branch: Mutex::new("master".to_string()),
            branches: Mutex::new(vec![Branch {
                name: "master".to_string(),
                head_sha: "123abc".to_string(),
            }]),
            private: Mutex::new(false),
            next_number: AtomicU64::new(1),
            list_branches_calls: AtomicU64::new(0),
            default_branch_calls: AtomicU64::new(0),
            is_private_calls: AtomicU64::new(0),
            create_ref_calls: Mutex::new(Vec::new()),
            put_file_calls: Mutex::new(Vec::new()),
            create_issue_calls: Mutex::new(Vec::new()),
            create_pr_calls: Mutex::new(Vec::new()),
            error_on_create_ref: Mutex::new(None),
            error_on_put_file: Mutex::new(None),
            error_on_create_issue: Mutex::new(None),
            error_on_create_pr: Mutex::new(None),
            error_on_is_private: Mutex::new(None),
        }
    }

    // === Configuration ===

    /// Replace the branch list with `(name, head_sha)` pairs
    pub fn set_branches(&self, branches: &[(&str, &str)]) {
        *self.branches.lock().unwrap() = branches
            .iter()
            .map(|(name, sha)| Branch {
                name: (*name).to_string(),
                head_sha: (*sha).to_string(),
            })
            .collect();
    }

    /// Set the default branch name
    pub fn set_default_branch(&self, name: &str) {
        *self.default_branch.lock().unwrap() = name.to_string();
    }

    /// Set repository visibility
    pub fn set_private(&self, private: bool) {
        *self.private.lock().unwrap() = private;
    }

    // === Error injection ===

    /// Make `create_ref` return an error
    pub fn fail_create_ref(&self, msg: &str) {
        *self.error_on_create_ref.lock().unwrap() = Some(msg.to_string());
    }

    /// Make the `index`-th `put_file` call (zero-based) return an error
    pub fn fail_put_file_at(&self, index: usize, msg: &str) {
        *self.error_on_put_file.lock().unwrap() = Some((index, msg.to_string()));
    }

    /// Make `create_issue` return an error
    pub fn fail_create_issue(&self, msg: &str) {
        *self.error_on_create_issue.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `create_pull_request` return an error
    pub fn fail_create_pr(&self, msg: &str) {
        *self.error_on_create_pr.lock().unwrap() = Some(msg.to_string());
    }

    /// Make `is_private` return an error
    pub fn fail_is_private(&self, msg: &str) {
        *self.error_on_is_private.lock().unwrap() = Some(msg.to_string());
    }

    // === Call verification ===

    /// All `create_ref` calls
    pub fn get_create_ref_calls(&self) -> Vec<CreateRefCall> {
        self.create_ref_calls.lock().unwrap().clone()
    }

    /// All `put_file` calls
    pub fn get_put_file_calls(&self) -> Vec<PutFileCall> {
        self.put_file_calls.lock().unwrap().clone()
    }

    /// All `create_issue` calls
    pub fn get_create_issue_calls(&self) -> Vec<CreateIssueCall> {
        self.create_issue_calls.lock().unwrap().clone()
    }

    /// All `create_pull_request` calls
    pub fn get_create_pr_calls(&self) -> Vec<CreatePrCall> {
        self.create_pr_calls.lock().unwrap().clone()
    }

    /// Number of `is_private` calls
    pub fn get_is_private_calls(&self) -> u64 {
        self.is_private_calls.load(Ordering::SeqCst)
    }

    /// Total number of remote calls of any kind
    pub fn remote_call_count(&self) -> usize {
        usize::try_from(
            self.list_branches_calls.load(Ordering::SeqCst)
                + self.default_branch_calls.load(Ordering::SeqCst)
                + self.is_private_calls.load(Ordering::SeqCst),
        )
        .unwrap()
            + self.create_ref_calls.lock().unwrap().len()
            + self.put_file_calls.lock().unwrap().len()
            + self.create_issue_calls.lock().unwrap().len()
            + self.create_pr_calls.lock().unwrap().len()
    }

    /// Assert that `create_pull_request` was called with specific head and base
    pub fn assert_create_pr_called(&self, head: &str, base: &str) {
        let calls = self.get_create_pr_calls();
        assert!(
            calls.iter().any(|c| c.head == head && c.base == base),
            "Expected create_pull_request({head}, {base}) but got: {calls:?}"
        );
    }
}

impl Default for MockRepoService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RepoService for MockRepoService {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        self.list_branches_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.branches.lock().unwrap().clone())
    }

    async fn default_branch(&self) -> Result<String> {
        self.default_branch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.default_branch.lock().unwrap().clone())
    }

    async fn create_ref(&self, branch: &str, sha: &str) -> Result<()> {
        self.create_ref_calls.lock().unwrap().push(CreateRefCall {
            branch: branch.to_string(),
            sha: sha.to_string(),
        });

        if let Some(msg) = self.error_on_create_ref.lock().unwrap().as_ref() {
            return Err(Error::Remote(msg.clone()));
        }

        Ok(())
    }

    async fn put_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<()> {
        let call_index = {
            let mut calls = self.put_file_calls.lock().unwrap();
            calls.push(PutFileCall {
                path: path.to_string(),
                message: message.to_string(),
                content: content.to_vec(),
                branch: branch.to_string(),
            });
            calls.len() - 1
        };

        if let Some((index, msg)) = self.error_on_put_file.lock().unwrap().as_ref() {
            if *index == call_index {
                return Err(Error::Remote(msg.clone()));
            }
        }

        Ok(())
    }

    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
        self.create_issue_calls
            .lock()
            .unwrap()
            .push(CreateIssueCall {
                title: title.to_string(),
                body: body.to_string(),
                labels: labels.to_vec(),
            });

        if let Some(msg) = self.error_on_create_issue.lock().unwrap().as_ref() {
            return Err(Error::Remote(msg.clone()));
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(Issue {
            number,
            html_url: format!("https://github.com/testowner/testrepo/issues/{number}"),
        })
    }

    async fn create_pull_request(
        &self,
        base: &str,
        head: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<PullRequest> {
        self.create_pr_calls.lock().unwrap().push(CreatePrCall {
            base: base.to_string(),
            head: head.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            labels: labels.to_vec(),
        });

        if let Some(msg) = self.error_on_create_pr.lock().unwrap().as_ref() {
            return Err(Error::Remote(msg.clone()));
        }

        let number = self.next_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            html_url: format!("https://github.com/testowner/testrepo/pull/{number}"),
            base_ref: base.to_string(),
            head_ref: head.to_string(),
            title: title.to_string(),
        })
    }

    async fn is_private(&self) -> Result<bool> {
        self.is_private_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(msg) = self.error_on_is_private.lock().unwrap().as_ref() {
            return Err(Error::Remote(msg.clone()));
        }

        Ok(*self.private.lock().unwrap())
    }

    fn target(&self) -> &RepoTarget {
        &self.target
    }
}
