//! # PGx Core
//!
//! Core workflow logic for the clinical PGx analysis client.
//!
//! This crate contains everything with real control flow between the
//! presentation layer and the remote analysis service:
//! - Validation of user-selected variant-call files
//! - The HTTP gateway that turns one (file, drug) pair into one analysis call
//! - The workflow state machine driving a submission from idle to a
//!   rendered success or failure
//!
//! **No presentation concerns**: layout, theming and markup belong to the
//! consuming application. It reads [`WorkflowState`] and renders it.

pub mod config;
pub mod constants;
mod error;
pub mod gateway;
pub mod validation;
pub mod workflow;

pub use config::GatewayConfig;
pub use error::{AnalysisError, PgxResult};
pub use gateway::{AnalysisGateway, HttpAnalysisGateway};
pub use validation::{is_variant_call_name, SelectedFile};
pub use workflow::{WorkflowController, WorkflowState};
