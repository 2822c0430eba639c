//! Unified compiler error type used across all phases.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::node_rules::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Parse,
    Validate,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Parse => write!(f, "Parse"),
            Phase::Validate => write!(f, "Validate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("[{phase}:{code}] {message}{}", location(.node_id, .path))]
pub struct CompilerError {
    pub code: String,
    pub phase: Phase,
    pub message: String,
    pub node_id: Option<String>,
    /// Field path inside the node, for per-node field errors.
    pub path: Option<String>,
}

fn location(node_id: &Option<String>, path: &Option<String>) -> String {
    match (node_id, path) {
        (Some(id), Some(path)) => format!(" (node '{id}', at {path})"),
        (Some(id), None) => format!(" (node '{id}')"),
        (None, Some(path)) => format!(" (at {path})"),
        (None, None) => String::new(),
    }
}

impl CompilerError {
    pub fn parse(code: &str, message: impl Into<String>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Parse,
            message: message.into(),
            node_id: None,
            path: None,
        }
    }

    pub fn validate(code: &str, message: impl Into<String>, node_id: Option<String>) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Validate,
            message: message.into(),
            node_id,
            path: None,
        }
    }

    /// Lift a per-node field error into the compiler's error stream.
    pub fn from_field(code: &str, node_id: &str, error: ValidationError) -> Self {
        CompilerError {
            code: code.into(),
            phase: Phase::Validate,
            message: error.message,
            node_id: Some(node_id.to_string()),
            path: Some(error.path),
        }
    }
}
