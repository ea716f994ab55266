//! Evaluation service seam
//!
//! The watcher/session side only sees this trait, so the HTTP client can be
//! swapped for scripted or mocked services in tests.

use async_trait::async_trait;
use meter_core::{CommonPasswords, FetchResult, Password, PasswordAssessment, TipsPayload};

/// Remote collaborator that scores passwords and publishes guidance
#[async_trait]
pub trait AssessmentService: Send + Sync {
    /// Evaluate one password value
    ///
    /// # Errors
    /// Any [`meter_core::FetchError`]; the decoded assessment is returned
    /// unchanged on success.
    async fn fetch_assessment(&self, password: &Password) -> FetchResult<PasswordAssessment>;

    /// Load the static tips list
    async fn fetch_tips(&self) -> FetchResult<TipsPayload>;

    /// Load the published common-password list
    async fn fetch_common_passwords(&self) -> FetchResult<CommonPasswords>;
}
