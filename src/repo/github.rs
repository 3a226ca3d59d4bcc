//! GitHub repository service implementation

use crate::error::{Error, Result};
use crate::repo::RepoService;
use crate::types::{Branch, Issue, PullRequest, RepoTarget};
use async_trait::async_trait;
use octocrab::Octocrab;
use octocrab::params::repos::Reference;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    target: RepoTarget,
}

impl GitHubService {
    /// Create a service for `target`, authenticated with `token`
    pub fn new(token: &str, target: RepoTarget, host: Option<&str>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::Remote(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::Remote(e.to_string()))?;

        Ok(Self::from_client(client, target))
    }

    /// Create a service over an already built client
    #[must_use]
    pub const fn from_client(client: Octocrab, target: RepoTarget) -> Self {
        Self { client, target }
    }
}

#[async_trait]
impl RepoService for GitHubService {
    async fn list_branches(&self) -> Result<Vec<Branch>> {
        let page = self
            .client
            .repos(&self.target.owner, &self.target.name)
            .list_branches()
            .per_page(100)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|b| Branch {
                name: b.name,
                head_sha: b.commit.sha,
            })
            .collect())
    }

    async fn default_branch(&self) -> Result<String> {
        let repo = self
            .client
            .repos(&self.target.owner, &self.target.name)
            .get()
            .await?;

        repo.default_branch
            .ok_or_else(|| Error::Remote(format!("{} reports no default branch", self.target)))
    }

    async fn create_ref(&self, branch: &str, sha: &str) -> Result<()> {
        tracing::debug!(branch, sha, "creating branch ref");

        self.client
            .repos(&self.target.owner, &self.target.name)
            .create_ref(&Reference::Branch(branch.to_string()), sha)
            .await?;

        Ok(())
    }

    async fn put_file(
        &self,
        path: &str,
        message: &str,
        content: &[u8],
        branch: &str,
    ) -> Result<()> {
        tracing::debug!(path, branch, "committing file");

        self.client
            .repos(&self.target.owner, &self.target.name)
            .create_file(path, message, content)
            .branch(branch)
            .send()
            .await?;

        Ok(())
    }

    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
        let issues = self.client.issues(&self.target.owner, &self.target.name);
        let mut request = issues.create(title).body(body);

        if !labels.is_empty() {
            request = request.labels(labels.to_vec());
        }

        let issue = request.send().await?;
        tracing::debug!(number = issue.number, "created issue");

        Ok(Issue {
            number: issue.number,
            html_url: issue.html_url.to_string(),
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
        let pr = self
            .client
            .pulls(&self.target.owner, &self.target.name)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;
        tracing::debug!(number = pr.number, "created pull request");

        // Labels go through the issues API; a pull request is an issue.
        if !labels.is_empty() {
            self.client
                .issues(&self.target.owner, &self.target.name)
                .add_labels(pr.number, labels)
                .await?;
        }

        Ok(PullRequest {
            number: pr.number,
            html_url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    async fn is_private(&self) -> Result<bool> {
        let repo = self
            .client
            .repos(&self.target.owner, &self.target.name)
            .get()
            .await?;

        Ok(repo.private.unwrap_or(false))
    }

    fn target(&self) -> &RepoTarget {
        &self.target
    }
}
