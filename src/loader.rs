//! Generic fetch → normalize → state loader shared by every page.
//!
//! A page supplies three things: the request future, a normalizer that
//! turns the raw payload into render-ready data, and optionally a fallback
//! used when the request fails. The loader owns the `loading`/`error`
//! bookkeeping.

use std::future::Future;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::Result;

/// Render-ready state of one page section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState<T> {
    pub loading: bool,
    /// Message of the last failed request, kept even when fallback data is shown.
    pub error: Option<String>,
    pub data: T,
}

impl<T> PageState<T> {
    /// The state a page is in before its request completes.
    pub fn pending(data: T) -> Self {
        Self {
            loading: true,
            error: None,
            data,
        }
    }

    /// Finished without error.
    pub fn is_ready(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

impl<T: Default> Default for PageState<T> {
    fn default() -> Self {
        Self::pending(T::default())
    }
}

/// Run one load: await `fetch`, normalize on success, and on failure record
/// the error and use `fallback` (or `T::default()`) as data.
///
/// `loading` is false in every returned state. Nothing is cached; each call
/// issues its own request.
pub async fn load<Raw, T, Fut, N>(
    fetch: Fut,
    normalize: N,
    fallback: Option<fn() -> T>,
) -> PageState<T>
where
    Fut: Future<Output = Result<Raw>>,
    N: FnOnce(Raw) -> T,
    T: Default,
{
    let mut state = PageState::pending(T::default());

    match fetch.await {
        Ok(raw) => state.data = normalize(raw),
        Err(e) => {
            warn!(error = %e, fallback = fallback.is_some(), "content request failed");
            state.error = Some(e.to_string());
            if let Some(fallback) = fallback {
                state.data = fallback();
            }
        }
    }

    state.loading = false;
    state
}

/// Run a page load on its own task and publish its state.
///
/// The receiver starts at [`PageState::pending`] so a view can show a
/// loading indicator, then sees the final state once. Dropping the receiver
/// does not cancel the request; abort the returned handle for that.
pub fn spawn_load<T, F>(page: F) -> (watch::Receiver<PageState<T>>, JoinHandle<()>)
where
    F: Future<Output = PageState<T>> + Send + 'static,
    T: Default + Send + Sync + 'static,
{
    let (tx, rx) = watch::channel(PageState::default());
    let handle = tokio::spawn(async move {
        let state = page.await;
        if tx.send(state).is_err() {
            debug!("page unmounted before its content arrived");
        }
    });
    (rx, handle)
}
