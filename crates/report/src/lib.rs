//! PGx analysis service wire/boundary support.
//!
//! This crate is responsible for the JSON shapes exchanged with the remote
//! pharmacogenomic analysis service: the structured report returned on
//! success and the `detail`-bearing body returned on failure.
//!
//! Workflow logic lives in `pgx-core`. This crate handles wire formats and
//! their invariants only: every decoded report carries a recognised risk
//! label (unrecognised values degrade to [`RiskLabel::Unknown`]) and a
//! confidence score bounded to `[0, 1]`.

mod report;

pub use report::{
    AnalysisReport, ClinicalRecommendation, DetectedVariant, ErrorDetail, LlmExplanation,
    PharmacogenomicProfile, QualityMetrics, RiskAssessment, RiskLabel,
};
