// src/lib.rs

pub mod domain;
pub mod error;
pub mod extractor;
pub mod service;

pub use domain::models::{AuditOptions, AuditReport, EligibilityResult};
pub use error::{AuditError, FetchFailure};
pub use service::{AuditEngine, FetchConfig};
