// src/github/client.rs
// =============================================================================
// A thin GitHub REST client: one reqwest::Client carrying the credential,
// plus the page-walking loop used for every list endpoint.
//
// The client is built once per run and passed by reference to whoever needs
// it. Every response is logged, and any non-2xx status becomes an
// ExportError::Api that aborts the caller.
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error, info};

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

// GitHub rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Error bodies look like {"message": "Not Found", "documentation_url": "..."}
#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

pub struct GithubClient {
    http: Client,
    /// API root without a trailing slash, e.g. "https://api.github.com"
    base_url: String,
}

impl GithubClient {
    pub fn new(config: &ExportConfig) -> ExportResult<Self> {
        let base_url = config.api_url.as_str().trim_end_matches('/').to_string();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|_| ExportError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|source| ExportError::Transport {
                url: base_url.clone(),
                source,
            })?;

        Ok(GithubClient { http, base_url })
    }

    /// GETs `path` (relative to the API root) and deserializes the JSON body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ExportResult<T> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|source| ExportError::Transport {
                url: url.clone(),
                source,
            })?;

        let response = check_status(response).await?;
        let url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|source| ExportError::Transport {
                url: url.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| ExportError::MalformedResponse { url, source })
    }

    /// Walks `page = 1, 2, 3, ...` until a page comes back empty and returns
    /// every item in the order received.
    ///
    /// A short page is not taken as the last one: the loop always ends on an
    /// empty page, so a full export costs one extra request.
    pub async fn fetch_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        page_size: u32,
        extra_query: &[(&str, String)],
    ) -> ExportResult<Vec<T>> {
        let mut items = Vec::new();
        let mut page: u32 = 1;

        loop {
            let mut query = extra_query.to_vec();
            query.push(("per_page", page_size.to_string()));
            query.push(("page", page.to_string()));

            let page_items: Vec<T> = self.get_json(path, &query).await?;
            debug!(path, page, count = page_items.len(), "Fetched page");

            if page_items.is_empty() {
                break;
            }

            items.extend(page_items);
            page += 1;
        }

        Ok(items)
    }
}

// Logs the outcome of a request and turns non-2xx statuses into errors
async fn check_status(response: Response) -> ExportResult<Response> {
    let status = response.status();
    let url = response.url().to_string();

    if status.is_success() {
        info!(status = status.as_u16(), "Successful {}", url);
        return Ok(response);
    }

    // Prefer GitHub's own explanation, fall back to the reason phrase
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status.canonical_reason().unwrap_or("Unknown error").to_string(),
    };

    error!(url = %url, "Error: {} {}", status.as_u16(), message);

    Err(ExportError::Api {
        url,
        status,
        message,
    })
}
