//! Unified error handling system
//!
//! Provides structured error types with context, recovery suggestions, and proper error chaining

use crate::types::UpstreamStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

pub type ReadmegenResult<T> = Result<T, ReadmegenError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Additional metadata
    pub metadata: std::collections::HashMap<String, String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            metadata: std::collections::HashMap::new(),
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_metadata(mut self, key: &str, value: &str) -> Self {
        self.metadata.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the ReadmeGen system
#[derive(Error, Debug)]
pub enum ReadmegenError {
    /// The hosting API returned a non-success status at one of its call sites
    #[error("Upstream error at {stage}: HTTP {status}: {message}")]
    Upstream {
        stage: UpstreamStage,
        status: u16,
        message: String,
        context: ErrorContext,
    },

    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        model: Option<String>,
        context: ErrorContext,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        context: ErrorContext,
    },

    #[error("Operation timeout: {operation}")]
    Timeout {
        operation: String,
        duration_ms: u64,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },
}

impl ReadmegenError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ReadmegenError::Upstream { context, .. } => Some(context),
            ReadmegenError::Llm { context, .. } => Some(context),
            ReadmegenError::Network { context, .. } => Some(context),
            ReadmegenError::Config { context, .. } => Some(context),
            ReadmegenError::Validation { context, .. } => Some(context),
            ReadmegenError::Timeout { context, .. } => Some(context),
            ReadmegenError::Internal { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The remote status code, when the failure came from the hosting API
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ReadmegenError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Which hosting-API call failed, when applicable
    pub fn upstream_stage(&self) -> Option<UpstreamStage> {
        match self {
            ReadmegenError::Upstream { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Check if error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ReadmegenError::Network { .. } => true,
            ReadmegenError::Timeout { .. } => true,
            ReadmegenError::Upstream { status, .. } => *status == 429 || *status >= 500,
            ReadmegenError::Config { .. } => false,
            ReadmegenError::Validation { .. } => false,
            _ => false,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            ReadmegenError::Internal { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Internal error occurred"
                );
            }
            ReadmegenError::Config { .. } | ReadmegenError::Validation { .. } => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Configuration or validation error"
                );
            }
            ReadmegenError::Network { .. } | ReadmegenError::Timeout { .. } => {
                warn!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Network or timeout error (may be recoverable)"
                );
            }
            _ => {
                error!(
                    error_id = ?self.context().map(|c| &c.error_id),
                    error = %self,
                    "Error occurred"
                );
            }
        }
    }
}

/// Convenience macros for creating errors with context
#[macro_export]
macro_rules! upstream_error {
    ($stage:expr, $status:expr, $msg:expr, $component:expr) => {
        ReadmegenError::Upstream {
            stage: $stage,
            status: $status,
            message: $msg.to_string(),
            context: ErrorContext::new($component),
        }
    };
}

#[macro_export]
macro_rules! config_error {
    ($msg:expr, $component:expr) => {
        ReadmegenError::Config {
            message: $msg.to_string(),
            source: None,
            context: ErrorContext::new($component)
                .with_suggestion("Check your configuration file and environment variables"),
        }
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr, $field:expr, $component:expr) => {
        ReadmegenError::Validation {
            message: $msg.to_string(),
            field: Some($field.to_string()),
            context: ErrorContext::new($component)
                .with_suggestion("Check the field value and format"),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_carries_stage_and_status() {
        let err = ReadmegenError::Upstream {
            stage: UpstreamStage::Tree,
            status: 404,
            message: "Not Found".to_string(),
            context: ErrorContext::new("test"),
        };

        assert_eq!(err.upstream_stage(), Some(UpstreamStage::Tree));
        assert_eq!(err.upstream_status(), Some(404));
        assert!(err.to_string().contains("tree"));
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_error_context_builder() {
        let context = ErrorContext::new("fetcher")
            .with_operation("get_file_tree")
            .with_metadata("owner", "octocat")
            .with_suggestion("Check repository permissions");

        assert_eq!(context.component, "fetcher");
        assert_eq!(context.operation.as_deref(), Some("get_file_tree"));
        assert_eq!(context.metadata.get("owner").map(String::as_str), Some("octocat"));
        assert_eq!(context.recovery_suggestions.len(), 1);
    }

    #[test]
    fn test_error_macros() {
        let err = crate::validation_error!("missing owner", "owner", "handlers");
        assert!(matches!(err, ReadmegenError::Validation { .. }));

        let err = crate::upstream_error!(UpstreamStage::Languages, 503, "unavailable", "fetcher");
        assert_eq!(err.upstream_status(), Some(503));
    }

    #[test]
    fn test_recoverability() {
        let rate_limited = ReadmegenError::Upstream {
            stage: UpstreamStage::Languages,
            status: 429,
            message: "rate limited".to_string(),
            context: ErrorContext::new("test"),
        };
        assert!(rate_limited.is_recoverable());

        let missing_param = ReadmegenError::Validation {
            message: "missing owner".to_string(),
            field: Some("owner".to_string()),
            context: ErrorContext::new("test"),
        };
        assert!(!missing_param.is_recoverable());
    }
}
