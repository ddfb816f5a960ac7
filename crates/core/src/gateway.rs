//! HTTP gateway to the remote analysis service.
//!
//! One call to [`AnalysisGateway::submit`] is exactly one POST to the
//! service's analyze endpoint. The gateway does not cache, queue, batch or
//! retry; retrying is a conscious user action (resubmit) handled upstream.

use crate::config::GatewayConfig;
use crate::validation::SelectedFile;
use crate::{AnalysisError, PgxResult};
use pgx_report::{AnalysisReport, ErrorDetail};
use pgx_types::DrugName;
use reqwest::multipart::{Form, Part};

/// Seam between the workflow controller and the network.
///
/// The controller is generic over this trait; tests drive it with a stub,
/// and a caller needing cancellation or timeouts can wrap the HTTP
/// implementation behind the same seam.
#[async_trait::async_trait]
pub trait AnalysisGateway {
    /// Submits one (file, drug) pair for analysis.
    ///
    /// Preconditions: the file has passed validation and the drug name is
    /// non-empty, both enforced by the calling controller's types.
    async fn submit(&self, file: &SelectedFile, drug: &DrugName) -> PgxResult<AnalysisReport>;
}

/// Gateway implementation over a shared `reqwest` client.
///
/// No caller-side timeout is configured; the transport's own limits are the
/// only bound on how long a submission may stay in flight.
#[derive(Debug, Clone)]
pub struct HttpAnalysisGateway {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl HttpAnalysisGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Builds the gateway over a caller-supplied client, for callers that
    /// configure their own connection pool or proxy settings.
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

#[async_trait::async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn submit(&self, file: &SelectedFile, drug: &DrugName) -> PgxResult<AnalysisReport> {
        let url = self.config.analyze_url();
        tracing::debug!(
            "submitting {} ({} bytes) for drug {} to {}",
            file.name(),
            file.size_bytes(),
            drug,
            url
        );

        // The service reads `drug` as a query parameter and the file as the
        // single multipart field named `file`.
        let part = Part::bytes(file.bytes().to_vec()).file_name(file.name().to_owned());
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .query(&[("drug", drug.as_str())])
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await?;
            return match serde_json::from_slice::<ErrorDetail>(&body) {
                Ok(err) => {
                    tracing::warn!("analysis rejected by service: {}", err.detail);
                    Err(AnalysisError::Service { detail: err.detail })
                }
                Err(_) => {
                    tracing::warn!("analysis failed with status {} and opaque body", status);
                    Err(AnalysisError::UnexpectedStatus { status })
                }
            };
        }

        let body = response.bytes().await?;
        let report = serde_json::from_slice(&body).map_err(AnalysisError::Decode)?;
        tracing::debug!("decoded analysis report for drug {}", drug);
        Ok(report)
    }
}
