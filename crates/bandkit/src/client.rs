//! HTTP client and the page operations built on it

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use std::time::Duration;
use tracing::debug;

use crate::error::FetchError;
use crate::extract;
use crate::query;
use crate::types::{Album, Artist, DiscoverPage, SearchResponse, TagPage, Track};
use crate::DEFAULT_USER_AGENT;

/// Public Bandcamp site root
pub const BANDCAMP_BASE: &str = "https://bandcamp.com";

/// Per-request timeout, covering connect and body
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Accept header sent with every page request
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Accept-Language header sent with every page request
const ACCEPT_LANG: &str = "en-US,en;q=0.5";

/// Builder for configuring a [`BandcampClient`]
#[derive(Debug, Clone, Default)]
pub struct ClientBuilder {
    user_agent: Option<String>,
    base_url: Option<String>,
}

impl ClientBuilder {
    /// Create a builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom User-Agent
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the site root used for search, tag and discovery URLs.
    ///
    /// Album, artist and track lookups take full URLs and are unaffected.
    pub fn base_url(mut self, base: impl Into<String>) -> Self {
        self.base_url = Some(base.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<BandcampClient, FetchError> {
        let user_agent = self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANG));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(BandcampClient {
            http,
            base_url: self
                .base_url
                .unwrap_or_else(|| BANDCAMP_BASE.to_string()),
        })
    }
}

/// Client for Bandcamp data extraction
///
/// Owns a single long-lived `reqwest::Client` (safe to share across
/// concurrent invocations) and an immutable configuration. Each
/// operation performs one GET, parses the returned HTML and assembles
/// the canonical record for that page type. Redirects are followed by
/// the client's default policy; there are no retries.
#[derive(Debug, Clone)]
pub struct BandcampClient {
    http: reqwest::Client,
    base_url: String,
}

impl BandcampClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self, FetchError> {
        ClientBuilder::new().build()
    }

    /// Create a client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fetch a URL and return the HTML body.
    ///
    /// Any network failure, timeout or non-2xx status aborts the whole
    /// invocation with a [`FetchError`].
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "Fetching page");
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(e, FETCH_TIMEOUT.as_secs()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(e, FETCH_TIMEOUT.as_secs()))
    }

    /// Search for albums, artists, tracks, labels or fans.
    ///
    /// `item_type` is one of `all`, `album`, `artist`, `track`, `label`,
    /// `fan`; unrecognized values produce an unfiltered search. `page`
    /// is 1-based.
    pub async fn search(
        &self,
        query: &str,
        item_type: &str,
        page: u32,
    ) -> Result<SearchResponse, FetchError> {
        let url = query::search_url(&self.base_url, query, item_type, page);
        let html = self.fetch(&url).await?;
        Ok(extract::search::parse(&html, page))
    }

    /// Get album details from an album page URL
    pub async fn album(&self, url: &str) -> Result<Album, FetchError> {
        let html = self.fetch(url).await?;
        Ok(extract::album::parse(&html, url))
    }

    /// Get artist or label details from an artist page URL
    pub async fn artist(&self, url: &str) -> Result<Artist, FetchError> {
        let html = self.fetch(url).await?;
        Ok(extract::artist::parse(&html, url))
    }

    /// Get track details from a track page URL
    pub async fn track(&self, url: &str) -> Result<Track, FetchError> {
        let html = self.fetch(url).await?;
        Ok(extract::track::parse(&html, url))
    }

    /// Browse albums under a tag.
    ///
    /// `sort` is one of `pop`, `new`, `rec` and passes through verbatim.
    pub async fn tag_page(
        &self,
        tag: &str,
        sort: &str,
        page: u32,
    ) -> Result<TagPage, FetchError> {
        let url = query::tag_url(&self.base_url, tag, sort, page);
        let html = self.fetch(&url).await?;
        Ok(extract::listing::parse_tag(&html, tag, sort, page))
    }

    /// Browse the discovery page.
    ///
    /// Empty `genre`/`subgenre`, `format == "all"` and `location == 0`
    /// leave the corresponding filters off.
    pub async fn discover(
        &self,
        genre: &str,
        subgenre: &str,
        sort: &str,
        format: &str,
        location: u32,
    ) -> Result<DiscoverPage, FetchError> {
        let url = query::discover_url(&self.base_url, genre, subgenre, sort, format, location);
        let html = self.fetch(&url).await?;
        Ok(extract::listing::parse_discover(&html, genre, subgenre, sort))
    }
}
