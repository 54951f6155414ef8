//! Partition-scoped export configuration.

use std::{fmt, str::FromStr};

/// What to do with a record that fails to transcode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Fail the partition on the first bad record.
    #[default]
    Abort,
    /// Log a warning, count the record as rejected and continue.
    Skip,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorPolicy::Abort => "abort",
            ErrorPolicy::Skip => "skip",
        })
    }
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "skip" => Ok(ErrorPolicy::Skip),
            other => Err(format!("unknown error policy '{other}' (expected abort or skip)")),
        }
    }
}

/// Settings fixed once per partition: target record name, routing-key
/// column and per-record error policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    record_name: String,
    key_field: Option<String>,
    error_policy: ErrorPolicy,
}

/// Builder for configuring [`ExportConfig`].
#[derive(Debug, Clone)]
pub struct ExportConfigBuilder {
    record_name: String,
    key_field: Option<String>,
    error_policy: ErrorPolicy,
}

impl ExportConfig {
    /// Create a builder for records named `record_name`.
    pub fn builder(record_name: impl Into<String>) -> ExportConfigBuilder {
        ExportConfigBuilder {
            record_name: record_name.into(),
            key_field: None,
            error_policy: ErrorPolicy::default(),
        }
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    /// Top-level column whose value becomes the message key. `None` produces
    /// keyless messages.
    pub fn key_field(&self) -> Option<&str> {
        self.key_field.as_deref()
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }
}

impl ExportConfigBuilder {
    /// Route messages by the value of the top-level column `name`.
    pub fn with_key_field(mut self, name: impl Into<String>) -> Self {
        self.key_field = Some(name.into());
        self
    }

    /// Set the per-record error policy (default: [`ErrorPolicy::Abort`]).
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn build(self) -> ExportConfig {
        ExportConfig {
            record_name: self.record_name,
            key_field: self.key_field,
            error_policy: self.error_policy,
        }
    }
}
