use std::time::Duration;

use thirtyfour::error::WebDriverError;

use crate::services::search_session::SessionState;

/// Session failures, ordered by blast radius. `Navigation` aborts the whole
/// run; everything else is fatal for the current term only.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("search engine home page unreachable: {0}")]
    Navigation(#[source] WebDriverError),

    #[error("no result containers appeared within {timeout:?}")]
    ResultsTimeout {
        timeout: Duration,
        #[source]
        source: WebDriverError,
    },

    #[error("could not filter to the web tab (primary: {primary}; fallback: {fallback})")]
    TabFilterFailure {
        primary: WebDriverError,
        fallback: WebDriverError,
    },

    #[error("session is in state {state:?} and cannot {operation}")]
    OutOfOrder {
        state: SessionState,
        operation: &'static str,
    },

    #[error(transparent)]
    Driver(#[from] WebDriverError),
}

/// One result container did not yield a required subfield. Fatal for that
/// single item; the batch continues.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("result container is missing its {field}")]
pub struct ExtractionItemError {
    pub field: &'static str,
}
