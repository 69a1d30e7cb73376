use log::debug;
use serde_json::Value;

use crate::fetcher::{FetchError, JsonFetcher};
use crate::memo::Memo;
use crate::nested::access_nested;
use crate::types::RepoName;

const ORG_URL: &str = "https://api.github.com/orgs";

/// Read-through client for the public repositories of a github
/// organization.
///
/// The organization record is fetched once per instance and kept for its
/// lifetime; the repository listing is refetched on every
/// [`public_repos`](OrgClient::public_repos) call. Transport errors
/// propagate to the caller untouched.
pub struct OrgClient<F: JsonFetcher> {
    org_name: String,
    fetcher: F,
    org: Memo<Value>,
}

impl<F: JsonFetcher> OrgClient<F> {
    pub fn new(org_name: impl Into<String>, fetcher: F) -> Self {
        OrgClient {
            org_name: org_name.into(),
            fetcher,
            org: Memo::new(),
        }
    }

    /// The injected transport.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// The organization record. Fetched on first access only.
    pub async fn org(&self) -> Result<Value, FetchError> {
        self.org
            .get_or_try_init(|| async move {
                let url = format!("{}/{}", ORG_URL, self.org_name);
                self.fetcher.fetch_json(&url).await
            })
            .await
    }

    /// Repository-listing url, read out of the memoized organization
    /// record on each access. `None` when the record carries no
    /// `repos_url`.
    async fn public_repos_url(&self) -> Result<Option<String>, FetchError> {
        let org = self.org().await?;
        let url = access_nested(&org, &["repos_url"])
            .ok()
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(url)
    }

    /// Names of the organization's public repositories in listing order,
    /// optionally narrowed to the repositories under `license`.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<RepoName>, FetchError> {
        let repos_url = match self.public_repos_url().await? {
            Some(url) => url,
            None => {
                debug!("organization {} has no repos_url", self.org_name);
                return Ok(Vec::new());
            }
        };

        let payload = self.fetcher.fetch_json(&repos_url).await?;
        let repos = payload.as_array().map(Vec::as_slice).unwrap_or_default();

        let names = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .filter_map(|repo| repo.get("name").and_then(Value::as_str))
            .map(|name| RepoName(name.to_string()))
            .collect();

        Ok(names)
    }

    /// True when the repository record holds a `license.key` equal to
    /// `license_key`. A record without a license never matches.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        match access_nested(repo, &["license", "key"]) {
            Ok(key) => key.as_str() == Some(license_key),
            Err(_) => false,
        }
    }
}
