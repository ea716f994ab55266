//! Meter Client - Result Fetcher
//!
//! Request/response exchange with the evaluation service:
//! - `POST /api/check-password` for assessments
//! - `GET /api/password-tips` and `GET /api/common-passwords`
//! - Secure-transport check, bearer token, per-request timeout
//! - Failure normalization into [`meter_core::FetchError`]

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod client;
pub mod service;

pub use client::{
    HttpAssessmentService, CHECK_PASSWORD_PATH, COMMON_PASSWORDS_PATH, TIPS_PATH,
    USER_AGENT_VALUE,
};
pub use service::AssessmentService;
