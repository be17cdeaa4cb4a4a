//! Link reachability checking

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP statuses that mark a link as broken
pub const BROKEN_STATUSES: [u16; 2] = [404, 503];

/// Failure to obtain a status for a URL
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The request could not be completed
    #[error("request to {url} failed: {reason}")]
    Request {
        /// Probed URL
        url: String,
        /// Transport-level reason
        reason: String,
    },

    /// No response within the configured timeout
    #[error("request to {url} timed out")]
    Timeout {
        /// Probed URL
        url: String,
    },
}

/// Fetches the HTTP status of a URL
pub trait LinkProbe {
    fn probe(&self, url: &str) -> Result<u16, ProbeError>;
}

/// Outcome of checking a document's links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkReport {
    /// Links present in the document
    pub found: usize,
    /// Whether link checking ran
    pub checked: bool,
    /// Links that failed or answered with a broken status, in document order
    pub broken: Vec<String>,
    /// Links that were not probed (mail addresses)
    pub skipped: Vec<String>,
}

impl LinkReport {
    /// A report for links that were counted but never probed
    pub fn unchecked(found: usize) -> Self {
        Self {
            found,
            ..Default::default()
        }
    }

    /// Links that were actually sent a request
    pub fn probed(&self) -> usize {
        if self.checked {
            self.found.saturating_sub(self.skipped.len())
        } else {
            0
        }
    }
}

/// Mail links are never probed
pub fn is_probeable(url: &str) -> bool {
    !url.contains("mailto")
}

/// Probe every link in order.
///
/// `on_progress` is called before each probe with the link's index and URL.
pub fn check_links<P>(urls: &[String], probe: &P, mut on_progress: impl FnMut(usize, &str)) -> LinkReport
where
    P: LinkProbe + ?Sized,
{
    let mut report = LinkReport {
        found: urls.len(),
        checked: true,
        ..Default::default()
    };

    for (index, url) in urls.iter().enumerate() {
        if !is_probeable(url) {
            report.skipped.push(url.clone());
            continue;
        }

        on_progress(index, url);
        match probe.probe(url) {
            Ok(status) if BROKEN_STATUSES.contains(&status) => {
                debug!("{url} answered {status}");
                report.broken.push(url.clone());
            }
            Ok(_) => {}
            Err(error) => {
                debug!("{error}");
                report.broken.push(url.clone());
            }
        }
    }

    report
}
