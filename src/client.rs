use anyhow::{Context, Result};
use reqwest::{Client, Url};

use crate::error::FetchError;
use crate::models::User;

/// The one endpoint this application talks to. Fixed, unparameterized.
pub const USERS_URL: &str = "https://api.github.com/users";

/// Creates a preconfigured HTTP client with required headers.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", HeaderValue::from_static("rust-github-users-client"));
    headers.insert("Accept", HeaderValue::from_static("application/vnd.github.v3+json"));

    if let Some(token) = token {
        let mut val = HeaderValue::from_str(&format!("Bearer {token}"))
            .context("Invalid token value")?;
        val.set_sensitive(true);
        headers.insert(AUTHORIZATION, val);
    }

    Client::builder()
        .default_headers(headers)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetches the user listing from the fixed GitHub endpoint.
///
/// A single attempt: no retries, no timeout override, no cancellation.
pub async fn fetch_users(client: &Client) -> Result<Vec<User>, FetchError> {
    fetch_users_from(client, USERS_URL).await
}

pub(crate) async fn fetch_users_from(client: &Client, url: &str) -> Result<Vec<User>, FetchError> {
    let url = Url::parse(url).map_err(|_| FetchError::InvalidUrl)?;

    log::debug!("GET {url}");

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        return Err(FetchError::RequestFailed(format!(
            "GitHub API error ({status})"
        )));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

    decode_users(&body)
}

/// Decodes the response body as a JSON array of users, all-or-nothing.
pub(crate) fn decode_users(body: &[u8]) -> Result<Vec<User>, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::RequestFailed(e.to_string()))
}

/// Downloads avatar image bytes and decodes them into raw RGBA pixels.
/// Returns `None` on any failure so the row keeps its placeholder.
pub async fn download_avatar_pixels(
    client: &Client,
    url: String,
    size: u32,
) -> Option<(Vec<u8>, u32, u32)> {
    // Ask GitHub for a thumbnail-sized image up front.
    let sized_url = if url.contains('?') {
        format!("{url}&s={size}")
    } else {
        format!("{url}?s={size}")
    };

    let bytes = client.get(&sized_url).send().await.ok()?.bytes().await.ok()?;
    let dynamic_image = image::load_from_memory(&bytes).ok()?;

    // Resize explicitly in case GitHub returns a larger cached image than
    // requested. thumbnail_exact uses less peak memory than resize_exact.
    let resized = dynamic_image.thumbnail_exact(size, size);

    let rgba = resized.to_rgba8();
    let (w, h) = rgba.dimensions();

    Some((rgba.into_raw(), w, h))
}
