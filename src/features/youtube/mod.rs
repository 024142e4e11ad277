//! # Feature: YouTube Search
//!
//! Keyword search against the YouTube Data API v3, shared by `/youtube` and
//! the `!youtube` text command.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with single-result video search

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Prefix of the legacy text command
pub const TEXT_COMMAND_PREFIX: &str = "!youtube";

pub const NOT_FOUND_REPLY: &str = "動画が見つかりませんでした。";

/// One search hit, reduced to the fields the bot replies with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoHit {
    pub video_id: String,
    pub title: String,
}

impl VideoHit {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// Backend able to run a keyword video search
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Search for videos matching `query`, returning at most `max_results` hits in ranking order
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<VideoHit>>;
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    id: ResourceId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResourceId {
    #[serde(default)]
    video_id: String,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
}

impl From<SearchResult> for VideoHit {
    fn from(result: SearchResult) -> Self {
        VideoHit {
            video_id: result.id.video_id,
            title: result.snippet.title,
        }
    }
}

/// YouTube Data API client
#[derive(Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, SEARCH_ENDPOINT)
    }

    /// Point the client at a different search endpoint (e.g. a local stub server)
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        YouTubeClient {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn search(&self, query: &str, max_results: u32) -> Result<Vec<VideoHit>> {
        let max_results = max_results.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
                ("q", query),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| anyhow!("YouTube search request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("YouTube search returned HTTP {status}: {body}"));
        }

        let list: SearchListResponse = response.json().await?;
        debug!("YouTube search for '{query}' returned {} items", list.items.len());
        Ok(list.items.into_iter().map(VideoHit::from).collect())
    }
}

/// Reply text for a set of search hits; only the first hit is ever used
pub fn format_search_reply(hits: &[VideoHit]) -> String {
    match hits.first() {
        Some(hit) => format!("検索結果: {} {}", hit.title, hit.watch_url()),
        None => NOT_FOUND_REPLY.to_string(),
    }
}

/// Run one search and build the reply both command surfaces send
pub async fn search_reply(search: &dyn VideoSearch, query: &str) -> Result<String> {
    let hits = search.search(query, 1).await?;
    info!("🔎 YouTube search '{query}' -> {} hit(s)", hits.len());
    Ok(format_search_reply(&hits))
}

/// Extract the query from a `!youtube` text command
///
/// Returns `None` when the message does not start with the prefix. The prefix is
/// matched literally, so `!youtubecats` searches for `cats`.
pub fn parse_text_command(content: &str) -> Option<&str> {
    content
        .strip_prefix(TEXT_COMMAND_PREFIX)
        .map(str::trim)
}

/// Query for a message that should trigger a text search
///
/// Messages written by bots never trigger, including this bot's own replies.
pub fn text_query(author_is_bot: bool, content: &str) -> Option<&str> {
    if author_is_bot {
        return None;
    }
    parse_text_command(content)
}
