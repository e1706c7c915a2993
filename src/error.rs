//! Errors surfaced by the board pipelines.

/// Failure of a pipeline call.
///
/// The not-found variants are expected outcomes and map to `404`; everything
/// that went wrong talking to Grand Lyon is folded into [`Error::Upstream`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no passage found")]
    NoPassageFound,

    #[error("station not found")]
    StationNotFound,

    #[error("{context}")]
    Upstream {
        context: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    pub fn upstream(context: &'static str, source: anyhow::Error) -> Self {
        Self::Upstream {
            context,
            source: source.into(),
        }
    }

    /// The message followed by every underlying cause, joined with `": "`,
    /// e.g. `fetching passages: error decoding response body: invalid type ...`.
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            report.push_str(": ");
            report.push_str(&err.to_string());
            cause = err.source();
        }
        report
    }

    /// `true` for the variants that mean "nothing matched the requested id".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NoPassageFound | Error::StationNotFound)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
