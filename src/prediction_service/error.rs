use thiserror::Error;

/// Everything that can go wrong between submitting an image and holding a
/// usable prediction. The shell collapses all of these into one message.
#[derive(Error, Debug)]
pub enum PredictionError {
    /// The request never produced a response (connection refused, DNS, TLS, ...)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    #[error("prediction service responded with HTTP {0}")]
    Status(u16),

    /// The body was not the JSON shape we expect
    #[error("malformed prediction response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Confidence must be a fraction in [0, 1]
    #[error("confidence {0} is not a fraction in [0, 1]")]
    ConfidenceOutOfRange(f64),
}
