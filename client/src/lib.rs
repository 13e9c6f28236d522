//! Page model and load pipeline for timeview.
//!
//! This crate reproduces, natively, what the demo page's script does in a
//! browser: once the page content is loaded, fetch the clock endpoint and
//! write the `time` member of the JSON body into the `#time` element.
//!
//! # Pipeline
//!
//! [`on_content_loaded`] runs a single linear chain per page load:
//!
//! 1. **Fetch** - one `GET {origin}/api`, body parsed as JSON
//! 2. **Render** - stringify the payload's `time` member and overwrite the
//!    `#time` element's text content
//!
//! No branching, no retries, no timeout, no cancellation. Failures terminate
//! the chain and are handed back to the caller, who is expected to discard
//! them: the page shows no error state, the display element simply keeps its
//! pre-load text.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`document`] | In-memory page model with id-selector lookup |
//! | [`fetch`] | HTTP fetch step and its error type |

pub mod document;
pub mod fetch;

use reqwest::Client;
use thiserror::Error;
use timeview_types::display_text;
use url::Url;

pub use document::{Document, Element, NoMatchError};
pub use fetch::{API_PATH, FetchError, fetch_payload};

/// Selector of the display element the pipeline writes to.
pub const TIME_SELECTOR: &str = "#time";

/// Failure of the load pipeline. Carried back to the load handler, which
/// discards it; nothing downstream observes these.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The page has no `#time` element to render into.
    #[error(transparent)]
    Render(#[from] NoMatchError),
}

/// The load handler body: fetch the clock endpoint, then render its `time`
/// member into the page.
///
/// Invoked exactly once per page load. The render step never runs before the
/// fetch step's parse completes, and the document is left untouched on any
/// fetch or render failure.
///
/// # Errors
///
/// Returns [`PipelineError`] for transport failures, non-JSON bodies, and a
/// missing `#time` element. A missing or null `time` member is not an error:
/// it renders as the `null` placeholder text.
pub async fn on_content_loaded(
    client: &Client,
    origin: &Url,
    document: &mut Document,
) -> Result<(), PipelineError> {
    let payload = fetch_payload(client, origin).await?;

    let text = display_text(&payload.time);
    document.set_text(TIME_SELECTOR, text)?;

    tracing::trace!(selector = TIME_SELECTOR, "rendered");
    Ok(())
}
