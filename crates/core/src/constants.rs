//! Constants used throughout the PGx core crate.
//!
//! This module contains endpoint, file-format and progress constants to
//! ensure consistency across the codebase and make maintenance easier.

/// Default base URL of the analysis service API when none is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";

/// Environment variable that overrides the analysis service base URL.
pub const API_BASE_URL_ENV: &str = "PGX_API_BASE_URL";

/// Path of the analyze endpoint, relative to the base URL.
pub const ANALYZE_PATH: &str = "/analyze";

/// Accepted variant-call filename suffixes (exact, case-sensitive).
pub const VARIANT_CALL_SUFFIXES: [&str; 2] = [".vcf", ".vcf.gz"];

/// Progress milestone entered when a submission starts gene-target identification.
pub const PROGRESS_GENE_TARGETS: u8 = 30;

/// Progress value reported for a completed analysis.
pub const PROGRESS_COMPLETE: u8 = 100;

/// Step label shown while the analysis request is in flight.
pub const STEP_GENE_TARGETS: &str = "Identifying gene targets...";
