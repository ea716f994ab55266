//! Testing utilities for the strength meter workspace
//!
//! Shared fixtures and a scripted evaluation service.

#![allow(missing_docs)]

use async_trait::async_trait;
use meter_client::AssessmentService;
use meter_core::{
    CommonPasswords, FetchError, FetchResult, Password, PasswordAssessment, TipsPayload,
};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;

pub fn assessment(score: i64, strength_level: i64) -> PasswordAssessment {
    PasswordAssessment {
        score,
        strength_level,
        strength_label: label_for(strength_level).to_string(),
        feedback: Vec::new(),
        issues: Vec::new(),
        message: String::new(),
        breached: false,
    }
}

/// Service answer for the input `"a"`
pub fn very_weak_assessment() -> PasswordAssessment {
    PasswordAssessment {
        score: 5,
        strength_level: 1,
        strength_label: "Very Weak".to_string(),
        feedback: Vec::new(),
        issues: vec!["Too short".to_string()],
        message: "Too short".to_string(),
        breached: false,
    }
}

pub fn strong_assessment() -> PasswordAssessment {
    PasswordAssessment {
        score: 72,
        strength_level: 4,
        strength_label: "Strong".to_string(),
        feedback: vec!["Length is good. Consider making it even longer".to_string()],
        issues: Vec::new(),
        message: "Strong password.".to_string(),
        breached: false,
    }
}

pub fn default_tips() -> TipsPayload {
    TipsPayload {
        tips: vec![
            "Use at least 12 characters for better security".to_string(),
            "Enable two-factor authentication when available".to_string(),
        ],
    }
}

fn label_for(level: i64) -> &'static str {
    match level {
        1 => "Very Weak",
        2 => "Weak",
        3 => "Good",
        4 => "Strong",
        5 => "Very Strong",
        _ => "Unknown",
    }
}

#[derive(Debug, Clone)]
struct Script {
    delay: Duration,
    outcome: FetchResult<PasswordAssessment>,
}

/// Evaluation service answering from a per-password script
///
/// Each answer can be delayed (with `tokio::time::pause` this gives exact
/// control over completion order). Unscripted passwords fail with a transport
/// error.
#[derive(Debug, Default)]
pub struct ScriptedService {
    scripts: Mutex<HashMap<String, Script>>,
    tips: Mutex<Option<FetchResult<TipsPayload>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, password: &str, assessment: PasswordAssessment) -> Self {
        self.answer_after(password, Duration::ZERO, assessment)
    }

    pub fn answer_after(
        self,
        password: &str,
        delay: Duration,
        assessment: PasswordAssessment,
    ) -> Self {
        self.scripts.lock().insert(
            password.to_string(),
            Script {
                delay,
                outcome: Ok(assessment),
            },
        );
        self
    }

    pub fn fail_after(self, password: &str, delay: Duration, error: FetchError) -> Self {
        self.scripts.lock().insert(
            password.to_string(),
            Script {
                delay,
                outcome: Err(error),
            },
        );
        self
    }

    pub fn with_tips(self, tips: FetchResult<TipsPayload>) -> Self {
        *self.tips.lock() = Some(tips);
        self
    }

    /// Passwords requested so far, in request order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl AssessmentService for ScriptedService {
    async fn fetch_assessment(&self, password: &Password) -> FetchResult<PasswordAssessment> {
        self.calls.lock().push(password.expose().to_string());
        let script = self.scripts.lock().get(password.expose()).cloned();

        match script {
            Some(script) => {
                if !script.delay.is_zero() {
                    tokio::time::sleep(script.delay).await;
                }
                script.outcome
            }
            None => Err(FetchError::Transport("no script for password".to_string())),
        }
    }

    async fn fetch_tips(&self) -> FetchResult<TipsPayload> {
        self.tips.lock().clone().unwrap_or_else(|| Ok(default_tips()))
    }

    async fn fetch_common_passwords(&self) -> FetchResult<CommonPasswords> {
        Ok(CommonPasswords {
            common_passwords: vec!["password".to_string(), "123456".to_string()],
        })
    }
}
