use std::path::PathBuf;

pub const VALID_REASON: &str = "Valid";

#[cfg_attr(feature = "with-serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    pub email: String,
    pub valid: bool,
    pub reason: String,
}

impl VerificationResult {
    pub fn valid(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            valid: true,
            reason: VALID_REASON.to_string(),
        }
    }

    pub fn invalid(email: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            valid: false,
            reason: reason.into(),
        }
    }

    /// `email | Reason: <text>`, the line written for invalid entries.
    pub fn invalid_line(&self) -> String {
        format!("{} | Reason: {}", self.email, self.reason)
    }
}

/// Results split into the two output buckets, input order kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    pub valid: usize,
    pub invalid: usize,
    pub valid_path: PathBuf,
    pub invalid_path: PathBuf,
}
