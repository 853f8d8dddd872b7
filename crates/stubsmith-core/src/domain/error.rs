// ============================================================================
// domain/error.rs - NAMING AND CONFIGURATION RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use crate::error::ErrorCategory;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports keep them per artifact)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Invalid sub-directory segment '{segment}': {reason}")]
    InvalidSubDirectory { segment: String, reason: String },

    // ========================================================================
    // Configuration Values
    // ========================================================================
    #[error("Invalid value '{value}' for configuration key '{key}': {reason}")]
    InvalidConfigValue {
        key: String,
        value: String,
        reason: String,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be turned into a class name", name),
                "Use letters and digits, starting with a letter".into(),
                "Words may be separated by '-', '_' or spaces: order-item → OrderItem".into(),
            ],
            Self::InvalidSubDirectory { segment, .. } => vec![
                format!("Directory segment '{}' is not usable", segment),
                "Use slash-separated words, e.g. --dir billing/invoices".into(),
            ],
            Self::InvalidConfigValue { key, .. } => vec![
                format!("Fix the value of '{}' in your configuration file", key),
                "Boolean keys accept: true, false, 1, 0, yes, no".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::InvalidSubDirectory { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }
}
