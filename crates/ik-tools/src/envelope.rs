//! Result envelopes: every tool invocation, however it fails, resolves to a
//! valid JSON value rather than propagating an error up the call stack —
//! this keeps the REPL responsive regardless of what a tool does.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    RegistryUnavailable,
    ToolNotFound,
    TranslationFailed,
    ExecutionFailed,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::RegistryUnavailable => "registry_unavailable",
            ErrorKind::ToolNotFound => "tool_not_found",
            ErrorKind::TranslationFailed => "translation_failed",
            ErrorKind::ExecutionFailed => "execution_failed",
        }
    }
}

#[derive(Serialize)]
struct Success {
    tool_success: bool,
    output: Value,
}

#[derive(Serialize)]
struct Failure {
    tool_success: bool,
    error_kind: &'static str,
    message: String,
}

pub fn success(output: Value) -> Value {
    serde_json::to_value(Success { tool_success: true, output }).expect("envelope always serializes")
}

pub fn failure(kind: ErrorKind, message: impl Into<String>) -> Value {
    serde_json::to_value(Failure {
        tool_success: false,
        error_kind: kind.as_str(),
        message: message.into(),
    })
    .expect("envelope always serializes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_shape() {
        let v = success(json!({"a": 1}));
        assert_eq!(v["tool_success"], json!(true));
        assert_eq!(v["output"], json!({"a": 1}));
    }

    #[test]
    fn failure_envelope_shape() {
        let v = failure(ErrorKind::ToolNotFound, "no such tool");
        assert_eq!(v["tool_success"], json!(false));
        assert_eq!(v["error_kind"], json!("tool_not_found"));
        assert_eq!(v["message"], json!("no such tool"));
    }
}
