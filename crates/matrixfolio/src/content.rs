//! Portfolio content loading.
//!
//! Content is read once, on a background thread, from a local file or an
//! `http(s)` URL. The result is handed back over a channel.

use std::fs;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use matrixfolio_core::{ContentError, Portfolio};

/// Timeout for HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    File(String),
    Url(String),
}

impl ContentSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            ContentSource::Url(source.to_string())
        } else {
            ContentSource::File(source.to_string())
        }
    }

    /// Read and parse the document. Blocks.
    pub fn load(&self) -> Result<Portfolio, ContentError> {
        let text = match self {
            ContentSource::File(path) => fs::read_to_string(path)?,
            ContentSource::Url(url) => fetch(url)?,
        };
        Portfolio::from_json(&text)
    }
}

impl std::fmt::Display for ContentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentSource::File(path) => write!(f, "file {path}"),
            ContentSource::Url(url) => write!(f, "url {url}"),
        }
    }
}

fn fetch(url: &str) -> Result<String, ContentError> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .build()
        .new_agent();

    agent
        .get(url)
        .call()
        .map_err(|e| ContentError::Http(e.to_string()))?
        .body_mut()
        .read_to_string()
        .map_err(|e| ContentError::Http(e.to_string()))
}

/// Loads content on a background thread.
#[derive(Debug)]
pub struct ContentLoader {
    receiver: Option<Receiver<Result<Portfolio, ContentError>>>,
}

impl ContentLoader {
    /// Start loading from `source` right away.
    pub fn spawn(source: ContentSource) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            tracing::info!(%source, "loading portfolio content");
            // The receiver may be gone if the app quit during boot.
            let _ = sender.send(source.load());
        });
        Self {
            receiver: Some(receiver),
        }
    }

    /// Take the result if it has arrived. Yields it at most once.
    pub fn poll(&mut self) -> Option<Result<Portfolio, ContentError>> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Whether a result is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }
}
