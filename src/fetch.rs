//! Generic Fetch Hook
//!
//! Loads JSON from a URL into a reactive `{data, loading, error}` state.
//! A new request is issued whenever the URL signal changes; responses from
//! superseded requests are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Network(String),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("{0}")]
    Decode(String),
}

/// Tri-state result of a fetch
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T> FetchState<T> {
    /// A request was issued
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// The request settled. On failure `data` is left as it was.
    pub fn finish(&mut self, result: Result<T, FetchError>) {
        match result {
            Ok(data) => self.data = Some(data),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }
}

/// Monotonic request counter; only the latest ticket is current
#[derive(Debug, Default)]
pub struct RequestGeneration(AtomicU64);

impl RequestGeneration {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.load(Ordering::Relaxed) == ticket
    }
}

/// Apply `result` to `state` if `ticket` is still the latest request.
/// Returns whether the state changed.
pub fn settle<T>(
    generation: &RequestGeneration,
    ticket: u64,
    state: &mut FetchState<T>,
    result: Result<T, FetchError>,
) -> bool {
    if !generation.is_current(ticket) {
        return false;
    }
    state.finish(result);
    true
}

/// GET `url` and decode the body as JSON
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Reactive fetch of `url`
///
/// No timeout and no retry: a hung request keeps `loading` set, a failed one
/// stays failed until the URL changes or the page reloads. If the owning
/// component is gone when the response arrives, the result is discarded.
pub fn use_fetch<T>(url: impl Into<Signal<String>>) -> ReadSignal<FetchState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let url = url.into();
    let (state, set_state) = signal(FetchState::<T>::default());
    let generation = Arc::new(RequestGeneration::default());

    Effect::new(move |_| {
        let url = url.get();
        let ticket = generation.next();
        set_state.update(FetchState::begin);
        log::debug!("[FETCH] #{} GET {}", ticket, url);

        let generation = Arc::clone(&generation);
        spawn_local(async move {
            let result = fetch_json::<T>(&url).await;
            if let Err(e) = &result {
                log::error!("[FETCH] API fetch error: {} ({})", e, url);
            }
            let applied = set_state.try_maybe_update(|s| {
                let applied = settle(&generation, ticket, s, result);
                (applied, applied)
            });
            match applied {
                Some(true) => {}
                Some(false) => log::debug!("[FETCH] #{} superseded, dropping response", ticket),
                None => log::debug!("[FETCH] #{} owner disposed, dropping response", ticket),
            }
        });
    });

    state
}
