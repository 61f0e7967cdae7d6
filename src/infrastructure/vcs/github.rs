//! GitHub REST API 연동 구현.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::application::ports::CommentGateway;
use crate::domain::comment::{PullRequestSummary, RemoteComment};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
const CLIENT_USER_AGENT: &str = "coverage-comment";

pub struct GitHubClient {
    client: Client,
    api_base: String,
    owner: String,
    repo: String,
    token: String,
}

impl GitHubClient {
    /// 저장소 단위 GitHub 클라이언트를 생성한다.
    pub fn new(
        api_base: String,
        owner: String,
        repo: String,
        token: String,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("github: failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            owner,
            repo,
            token,
        })
    }

    fn repo_path(&self, suffix: &str) -> String {
        format!("/repos/{}/{}/{}", self.owner, self.repo, suffix)
    }

    /// 모든 호출이 공유하는 요청 함수.
    /// 2xx가 아니거나 전송에 실패하면 오류, 본문이 비었거나 JSON이 아니면 `None`.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>> {
        let url = format!("{}{}", self.api_base, path);
        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, CLIENT_USER_AGENT);
        if let Some(body) = body {
            req = req
                .header(CONTENT_TYPE, "application/json")
                .body(serde_json::to_vec(body)?);
        }

        tracing::debug!(%method, %url, "github request");
        let resp = req
            .send()
            .await
            .map_err(|err| anyhow!("Request failed: {method} {url}: {err}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|err| anyhow!("Request failed: {method} {url}: {err}"))?;
        if !status.is_success() {
            return Err(anyhow!("Request failed: {method} {url} ({status}): {text}"));
        }

        if text.trim().is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&text) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                tracing::debug!(%url, error = %err, "github response is not JSON; ignoring");
                Ok(None)
            }
        }
    }

    async fn post_body(&self, method: Method, path: &str, body: &str) -> Result<()> {
        self.request(method, path, Some(&json!({ "body": body })))
            .await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct PullRecord {
    number: Option<u64>,
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentRecord {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

/// 목록 응답을 항목별로 역직렬화한다. 배열이 아니면 빈 목록, 형식이 어긋난 항목은 건너뛴다.
fn decode_list<T: DeserializeOwned>(value: Option<Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}

fn into_comments(value: Option<Value>) -> Vec<RemoteComment> {
    decode_list::<CommentRecord>(value)
        .into_iter()
        .map(|c| RemoteComment {
            id: c.id,
            body: c.body.unwrap_or_default(),
        })
        .collect()
}

#[async_trait]
impl CommentGateway for GitHubClient {
    async fn list_commit_pull_requests(&self, sha: &str) -> Result<Vec<PullRequestSummary>> {
        let value = self
            .request(Method::GET, &self.repo_path(&format!("commits/{sha}/pulls")), None)
            .await?;
        Ok(decode_list::<PullRecord>(value)
            .into_iter()
            .map(|p| PullRequestSummary {
                number: p.number,
                state: p.state,
            })
            .collect())
    }

    async fn list_pull_request_comments(&self, number: u64) -> Result<Vec<RemoteComment>> {
        let value = self
            .request(
                Method::GET,
                &self.repo_path(&format!("issues/{number}/comments")),
                None,
            )
            .await?;
        Ok(into_comments(value))
    }

    async fn create_pull_request_comment(&self, number: u64, body: &str) -> Result<()> {
        self.post_body(
            Method::POST,
            &self.repo_path(&format!("issues/{number}/comments")),
            body,
        )
        .await
    }

    async fn update_pull_request_comment(&self, comment_id: u64, body: &str) -> Result<()> {
        self.post_body(
            Method::PATCH,
            &self.repo_path(&format!("issues/comments/{comment_id}")),
            body,
        )
        .await
    }

    async fn list_commit_comments(&self, sha: &str) -> Result<Vec<RemoteComment>> {
        let value = self
            .request(
                Method::GET,
                &self.repo_path(&format!("commits/{sha}/comments")),
                None,
            )
            .await?;
        Ok(into_comments(value))
    }

    async fn create_commit_comment(&self, sha: &str, body: &str) -> Result<()> {
        self.post_body(
            Method::POST,
            &self.repo_path(&format!("commits/{sha}/comments")),
            body,
        )
        .await
    }

    async fn update_commit_comment(&self, comment_id: u64, body: &str) -> Result<()> {
        self.post_body(
            Method::PATCH,
            &self.repo_path(&format!("comments/{comment_id}")),
            body,
        )
        .await
    }
}
