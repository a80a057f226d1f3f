//! Wikipedia full-text search.
//!
//! Builds `action=query&list=search` requests and decodes their responses.
//! The HTTP round trip itself belongs to the front-end.

use serde::Deserialize;
use url::Url;

use crate::error::SearchError;

/// A search term as typed by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Empty terms are never sent.
    pub fn is_searchable(&self) -> bool {
        !self.term.is_empty()
    }

    /// Request URL for this term against `endpoint` (the `api.php` URL).
    pub fn request_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut()
            .append_pair("action", "query")
            .append_pair("list", "search")
            .append_pair("origin", "*")
            .append_pair("format", "json")
            .append_pair("srsearch", &self.term);
        url
    }
}

/// One search result.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchHit {
    pub pageid: u64,
    pub title: String,
    /// Excerpt with matches wrapped in `<span class="searchmatch">`. Untrusted HTML.
    #[serde(default)]
    pub snippet: String,
}

impl SearchHit {
    /// Link to the article, e.g. `https://en.wikipedia.org?curid=42`.
    pub fn article_url(&self, base: &str) -> String {
        format!("{}?curid={}", base.trim_end_matches('/'), self.pageid)
    }
}

/// Decoded results of one search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub hits: Vec<SearchHit>,
    /// Total matches reported by the API, when present.
    pub total_hits: Option<u64>,
}

#[derive(Deserialize)]
struct RawResponse {
    query: Option<RawQuery>,
    error: Option<RawError>,
}

#[derive(Deserialize)]
struct RawQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
    searchinfo: Option<RawSearchInfo>,
}

#[derive(Deserialize)]
struct RawSearchInfo {
    totalhits: u64,
}

#[derive(Deserialize)]
struct RawError {
    code: String,
    #[serde(default)]
    info: String,
}

/// Decode a search response body.
pub fn parse_response(body: &str) -> Result<SearchResults, SearchError> {
    let raw: RawResponse = serde_json::from_str(body)?;

    if let Some(error) = raw.error {
        return Err(SearchError::Api {
            code: error.code,
            info: error.info,
        });
    }

    let query = raw.query.ok_or(SearchError::MissingResults)?;
    Ok(SearchResults {
        hits: query.search,
        total_hits: query.searchinfo.map(|info| info.totalhits),
    })
}
