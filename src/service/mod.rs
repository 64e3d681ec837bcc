pub mod analyzers;
pub mod eligibility;
pub mod engine;
pub mod fetcher;
pub mod http;
pub mod report;

pub use eligibility::EligibilityChecker;
pub use engine::AuditEngine;
pub use fetcher::{FetchConfig, Fetcher};
