//! Meter Core - shared vocabulary of the strength meter
//!
//! Defines what flows between the watcher, fetcher and renderer:
//! - The assessment returned by the evaluation service
//! - Tips and common-password payloads
//! - Fetch failures and contract violations
//! - Client configuration
//!
//! # Example
//!
//! ```rust
//! use meter_core::{MeterConfig, PasswordAssessment};
//!
//! let config = MeterConfig::new().with_base_url("https://meter.example.com");
//! assert!(config.validate().is_ok());
//!
//! let assessment: PasswordAssessment = serde_json::from_str(
//!     r#"{"score":5,"strength":"Very Weak","strength_level":1,
//!         "feedback":[],"issues":["Too short"],"message":"Too short","breached":false}"#,
//! ).unwrap();
//! assert_eq!(assessment.score, 5);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::MeterConfig;
pub use error::{ConfigError, ContractViolation, FetchError, FetchResult, MeterError};
pub use types::{
    AssessmentRequestBody, CommonPasswords, ErrorEnvelope, Password, PasswordAssessment,
    TipsPayload,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the meter
    pub use crate::{
        FetchError, MeterConfig, MeterError, Password, PasswordAssessment, TipsPayload,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
