//! Serde models for the analysis service's response bodies.
//!
//! Field names match the service's JSON contract exactly; do not rename
//! fields here without a coordinated service change.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Risk category assigned to a drug for the analysed genome.
///
/// The service contract enumerates five labels. Any other value received on
/// the wire is degraded to [`RiskLabel::Unknown`] rather than rejected, so a
/// newer service cannot break older clients by adding a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLabel {
    Safe,
    AdjustDosage,
    Toxic,
    Ineffective,
    Unknown,
}

impl RiskLabel {
    /// The label as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Safe => "Safe",
            RiskLabel::AdjustDosage => "Adjust Dosage",
            RiskLabel::Toxic => "Toxic",
            RiskLabel::Ineffective => "Ineffective",
            RiskLabel::Unknown => "Unknown",
        }
    }

    fn from_wire(value: &str) -> Self {
        match value {
            "Safe" => RiskLabel::Safe,
            "Adjust Dosage" => RiskLabel::AdjustDosage,
            "Toxic" => RiskLabel::Toxic,
            "Ineffective" => RiskLabel::Ineffective,
            _ => RiskLabel::Unknown,
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RiskLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RiskLabel::from_wire(&s))
    }
}

/// Bounds a reported confidence score to `[0, 1]`.
///
/// The service schema already promises this range; the clamp keeps the
/// invariant even against a non-conforming service. Non-finite values are
/// treated as no confidence.
fn deserialize_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if !raw.is_finite() {
        return Ok(0.0);
    }
    Ok(raw.clamp(0.0, 1.0))
}

/// Risk verdict for the evaluated drug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_label: RiskLabel,
    #[serde(deserialize_with = "deserialize_confidence")]
    pub confidence_score: f64,
    /// Severity band, e.g. "none", "low", "moderate", "high", "critical".
    pub severity: String,
}

/// One variant the service matched against the target gene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedVariant {
    pub rsid: String,
    pub gene: String,
    pub star_allele: String,
}

/// Genotype-derived profile for the gene driving the drug's metabolism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacogenomicProfile {
    pub primary_gene: String,
    pub diplotype: String,
    /// Metaboliser phenotype code, e.g. "PM", "IM", "NM", "RM", "URM".
    pub phenotype: String,
    /// Variants in service-reported order.
    pub detected_variants: Vec<DetectedVariant>,
}

/// Actionable guidance for the clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClinicalRecommendation {
    pub recommendation_text: String,
    pub guideline_source: String,
}

/// Narrative explanation generated alongside the structured verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmExplanation {
    pub summary: String,
    pub mechanism: String,
    pub clinical_impact: String,
}

/// Parsing and matching quality indicators for the submitted file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub vcf_parsing_success: bool,
    pub variants_detected: u64,
    pub gene_match_found: bool,
}

/// One complete analysis outcome for a (variant file, drug) pair.
///
/// This is the success body of the analyze endpoint, decoded whole. A body
/// that does not decode into this shape is a decode failure upstream; no
/// partially-parsed report is ever constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub patient_id: String,
    pub drug: String,
    /// Service-local timestamp; reported without a timezone offset.
    pub timestamp: NaiveDateTime,
    pub risk_assessment: RiskAssessment,
    pub pharmacogenomic_profile: PharmacogenomicProfile,
    pub clinical_recommendation: ClinicalRecommendation,
    pub llm_generated_explanation: LlmExplanation,
    pub quality_metrics: QualityMetrics,
}

/// Failure body shape: the service reports errors as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A full success body as the service produces it.
    fn sample_report_json() -> serde_json::Value {
        serde_json::json!({
            "patient_id": "HG002",
            "drug": "WARFARIN",
            "timestamp": "2026-03-14T10:22:31.517482",
            "risk_assessment": {
                "risk_label": "Adjust Dosage",
                "confidence_score": 0.92,
                "severity": "moderate"
            },
            "pharmacogenomic_profile": {
                "primary_gene": "CYP2C9",
                "diplotype": "*1/*3",
                "phenotype": "IM",
                "detected_variants": [
                    { "rsid": "rs1057910", "gene": "CYP2C9", "star_allele": "*3" }
                ]
            },
            "clinical_recommendation": {
                "recommendation_text": "Reduce starting dose by 50%.",
                "guideline_source": "CPIC v4.2"
            },
            "llm_generated_explanation": {
                "summary": "Reduced CYP2C9 activity slows warfarin clearance.",
                "mechanism": "The *3 allele lowers enzyme activity.",
                "clinical_impact": "Higher bleeding risk at standard doses."
            },
            "quality_metrics": {
                "vcf_parsing_success": true,
                "variants_detected": 1,
                "gene_match_found": true
            }
        })
    }

    #[test]
    fn decodes_full_report() {
        let report: AnalysisReport = serde_json::from_value(sample_report_json()).unwrap();
        assert_eq!(report.drug, "WARFARIN");
        assert_eq!(report.risk_assessment.risk_label, RiskLabel::AdjustDosage);
        assert_eq!(report.pharmacogenomic_profile.detected_variants.len(), 1);
        assert_eq!(
            report.pharmacogenomic_profile.detected_variants[0].rsid,
            "rs1057910"
        );
        assert_eq!(report.quality_metrics.variants_detected, 1);
    }

    #[test]
    fn unrecognised_risk_label_degrades_to_unknown() {
        let mut body = sample_report_json();
        body["risk_assessment"]["risk_label"] = "Catastrophic".into();
        let report: AnalysisReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.risk_assessment.risk_label, RiskLabel::Unknown);
    }

    #[test]
    fn risk_label_round_trips_wire_form() {
        let encoded = serde_json::to_string(&RiskLabel::AdjustDosage).unwrap();
        assert_eq!(encoded, "\"Adjust Dosage\"");
        let decoded: RiskLabel = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, RiskLabel::AdjustDosage);
    }

    #[test]
    fn confidence_is_clamped_to_unit_interval() {
        let mut body = sample_report_json();
        body["risk_assessment"]["confidence_score"] = serde_json::json!(3.7);
        let report: AnalysisReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.risk_assessment.confidence_score, 1.0);

        let mut body = sample_report_json();
        body["risk_assessment"]["confidence_score"] = serde_json::json!(-0.2);
        let report: AnalysisReport = serde_json::from_value(body).unwrap();
        assert_eq!(report.risk_assessment.confidence_score, 0.0);
    }

    #[test]
    fn error_detail_decodes() {
        let err: ErrorDetail =
            serde_json::from_str("{\"detail\": \"Gene panel unavailable\"}").unwrap();
        assert_eq!(err.detail, "Gene panel unavailable");
    }

    #[test]
    fn missing_field_is_a_decode_error() {
        let mut body = sample_report_json();
        body.as_object_mut().unwrap().remove("risk_assessment");
        assert!(serde_json::from_value::<AnalysisReport>(body).is_err());
    }
}
