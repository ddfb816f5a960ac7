/// Errors that can terminate one analysis submission cycle.
///
/// Validation variants never reach the network; the remaining variants are
/// raised by the gateway. Every variant renders as a single human-readable
/// message suitable for surfacing to the clinician unchanged.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The selected file does not carry a recognised variant-call suffix.
    #[error("unsupported file type: {name} (expected .vcf or .vcf.gz)")]
    UnsupportedFile { name: String },
    /// The drug name was empty or otherwise invalid.
    #[error(transparent)]
    InvalidDrugName(#[from] pgx_types::TextError),
    /// The configured service base URL is unusable.
    #[error("invalid analysis service base URL: {0}")]
    InvalidBaseUrl(String),
    /// The request could not complete at the transport level.
    #[error("analysis request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Non-success status whose body carried no decodable `detail` message.
    #[error("analysis service returned status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },
    /// The service refused the analysis and said why.
    #[error("{detail}")]
    Service { detail: String },
    /// A success response whose body did not decode into a report.
    #[error("failed to decode analysis response: {0}")]
    Decode(#[source] serde_json::Error),
}

pub type PgxResult<T> = std::result::Result<T, AnalysisError>;
