pub(crate) mod about;
pub(crate) mod contact;
pub(crate) mod events;
pub(crate) mod gallery;
pub(crate) mod history;
pub(crate) mod news;
pub(crate) mod slider;
pub(crate) mod what_is;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{ContentError, Result};

const JSON: &str = "application/json";

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str) -> Result<T> {
    debug!(url, "fetching resource");

    let response = client
        .get(url)
        .header(ACCEPT, JSON)
        .send()
        .await
        .map_err(|e| ContentError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let body = read_body(url, response).await?;

    serde_json::from_str(&body).map_err(|e| ContentError::Decode {
        url: url.to_owned(),
        source: e,
    })
}

/// POST `body` as JSON. The response body is read and discarded.
pub(crate) async fn post_json<B: Serialize + ?Sized>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
) -> Result<()> {
    debug!(url, "posting resource");

    let payload = serde_json::to_vec(body).map_err(ContentError::Encode)?;
    let response = client
        .post(url)
        .header(CONTENT_TYPE, JSON)
        .header(ACCEPT, JSON)
        .body(payload)
        .send()
        .await
        .map_err(|e| ContentError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    read_body(url, response).await?;
    Ok(())
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| ContentError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Resolve an image reference from the API to an absolute URL.
///
/// `http…` is kept as-is, `/path` is joined to `origin`, and a bare file
/// name is looked up under `origin/uploads/`.
pub fn resolve_image_url(origin: &str, raw: &str) -> String {
    let origin = origin.trim_end_matches('/');
    if raw.starts_with("http") {
        raw.to_string()
    } else if raw.starts_with('/') {
        format!("{origin}{raw}")
    } else {
        format!("{origin}/uploads/{raw}")
    }
}

/// Resolve `image_url` in place, leaving empty values alone.
pub(crate) fn resolve_in_place(origin: &str, image_url: &mut String) {
    if !image_url.trim().is_empty() {
        *image_url = resolve_image_url(origin, image_url);
    }
}
