//! The analysis submission workflow state machine.
//!
//! A [`WorkflowController`] owns one submission cycle at a time. States
//! carry only the fields that are meaningful in them, so the presentation
//! layer cannot read results while a request is in flight, and "already
//! submitting" is a state rather than a flag.

use crate::constants::{
    PROGRESS_COMPLETE, PROGRESS_GENE_TARGETS, STEP_GENE_TARGETS,
};
use crate::gateway::AnalysisGateway;
use crate::validation::SelectedFile;
use crate::PgxResult;
use pgx_report::AnalysisReport;
use pgx_types::DrugName;

/// State of the current analysis cycle, read-only to the presentation layer.
///
/// Transitions are strictly sequential per controller: `Submitting` is only
/// entered from a non-`Submitting` state, and `Succeeded`/`Failed` only from
/// `Submitting` within the same cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    /// No submission attempted yet, or the last cycle has been reset.
    Idle,
    /// One analysis request is in flight.
    Submitting { progress: u8, step_label: String },
    /// The last submission produced reports, in service order.
    Succeeded { results: Vec<AnalysisReport> },
    /// The last submission failed; the message is ready to display verbatim.
    Failed { message: String },
}

impl WorkflowState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting { .. })
    }

    /// Progress percentage for a stepper display.
    pub fn progress(&self) -> u8 {
        match self {
            WorkflowState::Idle | WorkflowState::Failed { .. } => 0,
            WorkflowState::Submitting { progress, .. } => *progress,
            WorkflowState::Succeeded { .. } => PROGRESS_COMPLETE,
        }
    }

    /// Human-readable label for the current step; empty outside `Submitting`.
    pub fn step_label(&self) -> &str {
        match self {
            WorkflowState::Submitting { step_label, .. } => step_label,
            _ => "",
        }
    }
}

/// Drives one analysis cycle from file selection to a rendered outcome.
///
/// At most one request is in flight per controller instance; state is only
/// mutated from within the controller's own transition handlers.
pub struct WorkflowController<G> {
    gateway: G,
    file: Option<SelectedFile>,
    state: WorkflowState,
}

impl<G: AnalysisGateway> WorkflowController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            file: None,
            state: WorkflowState::Idle,
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Validates and stores a candidate file selection.
    ///
    /// On rejection the returned error is the user-visible notice and the
    /// previously selected file, if any, is left unchanged.
    pub fn select_file(&mut self, name: &str, bytes: Vec<u8>) -> PgxResult<()> {
        let file = SelectedFile::new(name, bytes)?;
        tracing::info!(
            "selected variant file {} ({} bytes)",
            file.name(),
            file.size_bytes()
        );
        self.file = Some(file);
        Ok(())
    }

    /// Drops the current selection.
    pub fn clear_file(&mut self) {
        self.file = None;
    }

    /// Submits the selected file and drug name for analysis.
    ///
    /// A no-op when a submission is already in flight, when no file is
    /// selected, or when the drug text is empty or whitespace; the
    /// presentation layer disables the submit action in those cases. A
    /// submission from `Succeeded` or `Failed` starts a fresh cycle,
    /// discarding the previous outcome.
    pub async fn submit(&mut self, drug_input: &str) {
        if self.state.is_submitting() {
            tracing::warn!("submission already in flight; ignoring");
            return;
        }
        let Some(file) = self.file.take() else {
            tracing::debug!("submit ignored: no variant file selected");
            return;
        };
        let Ok(drug) = DrugName::new(drug_input) else {
            tracing::debug!("submit ignored: drug name is empty");
            self.file = Some(file);
            return;
        };

        self.state = WorkflowState::Submitting {
            progress: PROGRESS_GENE_TARGETS,
            step_label: STEP_GENE_TARGETS.to_owned(),
        };
        tracing::info!("analysing {} against {}", file.name(), drug);

        let outcome = self.gateway.submit(&file, &drug).await;

        // The selection outlives the cycle so the user can resubmit.
        self.file = Some(file);
        self.state = match outcome {
            Ok(report) => {
                tracing::info!("analysis completed for {}", drug);
                WorkflowState::Succeeded {
                    results: vec![report],
                }
            }
            Err(err) => {
                let message = err.to_string();
                tracing::warn!("analysis failed for {}: {}", drug, message);
                WorkflowState::Failed { message }
            }
        };
    }
}
