use crate::discogs::models::{CollectionPage, PaginationInfo, Release, RemoteFolder};
use reqwest::{Client, Error as ReqwestError, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

const DISCOGS_API_URL: &str = "https://api.discogs.com";
const COLLECTION_PAGE_SIZE: u32 = 100;

#[derive(Error, Debug)]
pub enum DiscogsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("API rate limit exceeded")]
    RateLimit,
    #[error("Invalid API key")]
    InvalidApiKey,
    #[error("Not found")]
    NotFound,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Collection folders response wrapper
#[derive(Debug, Deserialize)]
struct FoldersResponse {
    folders: Vec<RemoteFolder>,
}

/// Detailed release response from Discogs (only the fields we display)
#[derive(Debug, Deserialize)]
struct ReleaseResponse {
    id: u64,
    title: String,
    year: Option<u32>,
}

/// Folder contents response wrapper
#[derive(Debug, Deserialize)]
struct FolderReleasesResponse {
    pagination: PaginationInfo,
    #[serde(default)]
    releases: Vec<CollectionItem>,
}

/// Single collection instance within a folder
#[derive(Debug, Deserialize)]
struct CollectionItem {
    id: u64,
}

#[derive(Clone)]
pub struct DiscogsClient {
    client: Client,
    token: String,
    user_agent: String,
    username: String,
    base_url: String,
}

impl DiscogsClient {
    pub fn new(token: String, user_agent: String, username: String) -> Self {
        Self {
            client: Client::new(),
            token,
            user_agent,
            username,
            base_url: DISCOGS_API_URL.to_string(),
        }
    }

    /// Point the client at a different API host (e.g. a local stub)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn folders_url(&self) -> String {
        format!(
            "{}/users/{}/collection/folders",
            self.base_url,
            urlencoding::encode(&self.username)
        )
    }

    fn folder_releases_url(&self, folder_id: u64) -> String {
        format!("{}/{}/releases", self.folders_url(), folder_id)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("User-Agent", &self.user_agent)
            .header("Authorization", format!("Discogs token={}", self.token))
    }

    /// List the user's collection folders in the order Discogs returns them
    pub async fn get_folders(&self) -> Result<Vec<RemoteFolder>, DiscogsError> {
        let url = self.folders_url();
        debug!("📡 Discogs API: GET {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = check_status(response, "collection folders")?;

        let text = response.text().await?;
        let folders: FoldersResponse = serde_json::from_str(&text)?;
        Ok(folders.folders)
    }

    /// Get display metadata for a release
    pub async fn get_release(&self, id: u64) -> Result<Release, DiscogsError> {
        let url = format!("{}/releases/{}", self.base_url, id);
        debug!("📡 Discogs API: GET {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = check_status(response, &format!("release {}", id))?;

        let release: ReleaseResponse = response.json().await?;

        Ok(Release {
            id: release.id,
            title: release.title,
            // Discogs reports an unknown year as 0
            year: release.year.filter(|y| *y > 0),
        })
    }

    /// Get one page of a collection folder's releases
    pub async fn get_folder_releases(
        &self,
        folder_id: u64,
        page: u32,
    ) -> Result<CollectionPage, DiscogsError> {
        if page == 0 {
            return Err(DiscogsError::InvalidInput(
                "Page number must be greater than 0".to_string(),
            ));
        }

        let url = self.folder_releases_url(folder_id);
        debug!("📡 Discogs API: GET {} page={}", url, page);

        let response = self
            .authorized(self.client.get(&url))
            .query(&[
                ("page", page.to_string()),
                ("per_page", COLLECTION_PAGE_SIZE.to_string()),
            ])
            .send()
            .await?;
        let response = check_status(response, &format!("folder {}", folder_id))?;

        // Get the raw response text first for debugging on error
        let response_text = response.text().await?;
        let releases_response: FolderReleasesResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                error!("JSON parsing error for folder {} page {}: {}", folder_id, page, e);
                error!("Raw response: {}", response_text);
                e
            })?;

        Ok(CollectionPage {
            releases: releases_response
                .releases
                .into_iter()
                .map(|item| item.id)
                .collect(),
            total_pages: releases_response.pagination.pages,
        })
    }

    /// Add a release to a collection folder
    pub async fn add_release_to_folder(
        &self,
        folder_id: u64,
        release_id: u64,
    ) -> Result<(), DiscogsError> {
        let url = format!("{}/{}", self.folder_releases_url(folder_id), release_id);
        debug!("📡 Discogs API: POST {}", url);

        let response = self.authorized(self.client.post(&url)).send().await?;
        check_status(response, &format!("release {}", release_id))?;
        Ok(())
    }
}

/// Map Discogs status codes onto `DiscogsError`
fn check_status(response: Response, what: &str) -> Result<Response, DiscogsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("✗ Discogs rate limit exceeded ({})", what);
            Err(DiscogsError::RateLimit)
        }
        StatusCode::UNAUTHORIZED => {
            warn!("✗ Discogs rejected the API token ({})", what);
            Err(DiscogsError::InvalidApiKey)
        }
        StatusCode::NOT_FOUND => {
            warn!("✗ Discogs: {} not found", what);
            Err(DiscogsError::NotFound)
        }
        _ => {
            warn!("✗ Discogs API error for {}: {}", what, status);
            match response.error_for_status() {
                Ok(_) => Err(DiscogsError::InvalidInput(format!(
                    "unexpected status {}",
                    status
                ))),
                Err(e) => Err(DiscogsError::Request(e)),
            }
        }
    }
}
