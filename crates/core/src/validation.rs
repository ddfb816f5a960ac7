//! Validation of user-selected genomic files.
//!
//! The analysis service accepts variant-call files only, declared by
//! filename suffix. The check is deliberately a suffix check and nothing
//! more: no content sniffing, matching the service's stated file-format
//! contract. A selection of zero files, or of a directory, never reaches
//! this module; the presentation layer represents it as "no candidate".

use crate::constants::VARIANT_CALL_SUFFIXES;
use crate::{AnalysisError, PgxResult};

/// Returns true if the filename carries a recognised variant-call suffix.
///
/// Matching is exact and case-sensitive: `.vcf` and `.vcf.gz` are accepted,
/// `.VCF` is not.
pub fn is_variant_call_name(name: &str) -> bool {
    VARIANT_CALL_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// A user-selected variant-call file held in memory for one submission cycle.
///
/// Construction is the validation step: a `SelectedFile` cannot exist with
/// an unrecognised suffix. The file is never persisted; it lives only as
/// long as the clinician's current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Validates a candidate selection.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::UnsupportedFile` if the name does not end in
    /// `.vcf` or `.vcf.gz`. The error message is suitable for showing to the
    /// user as the rejection notice.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> PgxResult<Self> {
        let name = name.into();
        if !is_variant_call_name(&name) {
            return Err(AnalysisError::UnsupportedFile { name });
        }
        Ok(Self { name, bytes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes.len() as u64
    }
}
