//! timeview CLI - Binary entry point.
//!
//! Plays the part of the browser hosting the demo page: build the page, let
//! it "load", run the fetch-then-render pipeline exactly once, then print the
//! clock element's text.
//!
//! ```text
//! main() -> resolve_origin() -> on_content_loaded() -> print #time text
//! ```
//!
//! The pipeline's failures are discarded after a debug-level trace, matching
//! the page's behavior: no error state is shown, the element keeps whatever
//! text it had before the load.

use std::env;
use std::io;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing_subscriber::EnvFilter;
use url::Url;

use timeview_client::{Document, TIME_SELECTOR, on_content_loaded};

/// Where the demo server listens when no origin is given.
const DEFAULT_ORIGIN: &str = "http://127.0.0.1:8080";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolve the page origin from the optional positional argument.
///
/// This is the one failure reported to the user: it happens before the page
/// "loads", so the silent-failure policy of the pipeline does not apply yet.
fn resolve_origin(arg: Option<&str>) -> Result<Url> {
    match arg {
        Some(raw) => Url::parse(raw).with_context(|| format!("invalid origin URL: {raw}")),
        None => Ok(Url::parse(DEFAULT_ORIGIN).expect("default origin is valid")),
    }
}

// Single-threaded on purpose: the pipeline is one cooperative task.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let origin = resolve_origin(args.get(1).map(String::as_str))?;
    tracing::info!(origin = %origin, "loading page");

    // The demo page: one empty clock element.
    let mut page = Document::new().with_element("time", "");

    let client = Client::new();
    if let Err(e) = on_content_loaded(&client, &origin, &mut page).await {
        tracing::debug!(error = %e, "load pipeline ended without rendering");
    }

    if let Some(text) = page.text_of(TIME_SELECTOR) {
        println!("{text}");
    }

    Ok(())
}
