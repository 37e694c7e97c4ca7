//! Error types and propagation policy.
//!
//! Only two error kinds cross module boundaries: initialization failures
//! (fatal for the run) and registration failures (fatal for one domain's
//! record). Every other probe failure is converted to data at the probe
//! boundary — an empty record list, a `valid: false` certificate status, or
//! an unreachable website flag — and never reaches the orchestrator as an
//! error.

mod types;

pub use types::{InitializationError, RegistrationError, SearchError};
