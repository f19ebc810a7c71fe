//! Per-invocation subprocess execution: write arguments to the tool's
//! stdin, read its result from stdout under a wall-clock deadline, and wrap
//! whatever happens into a JSON envelope.

use crate::envelope::{self, ErrorKind};
use crate::paths::Paths;
use crate::registry::ToolRegistry;
use serde_json::Value;
use std::io::{Read, Write};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

const EXECUTION_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RESULT_BYTES: usize = 64 * 1024;

/// Run `tool_name` from `registry` with `args`, translating `ik://` URIs on
/// the way in and out. Every failure path returns a failure envelope rather
/// than an `Err` — see the module doc.
pub fn execute_tool(
    registry: &ToolRegistry,
    paths: &Paths,
    agent_id: &str,
    tool_name: &str,
    args: &Value,
) -> Value {
    if registry.is_empty() {
        return envelope::failure(ErrorKind::RegistryUnavailable, "tool registry not initialized");
    }
    let Some(entry) = registry.lookup(tool_name) else {
        return envelope::failure(ErrorKind::ToolNotFound, format!("tool not found: {tool_name}"));
    };

    let translated_args = match paths.translate_ik_uri_to_path(args) {
        Ok(v) => v,
        Err(e) => return envelope::failure(ErrorKind::TranslationFailed, e.to_string()),
    };

    let raw_result = match run_subprocess(&entry.path, agent_id, &translated_args) {
        Ok(v) => v,
        Err(message) => return envelope::failure(ErrorKind::ExecutionFailed, message),
    };

    let translated_result = paths.translate_path_to_ik_uri(&raw_result);
    envelope::success(translated_result)
}

fn run_subprocess(tool_path: &str, agent_id: &str, args: &Value) -> Result<Value, String> {
    let args_bytes = serde_json::to_vec(args).map_err(|e| e.to_string())?;

    let mut child = Command::new(tool_path)
        .env("IKIGAI_AGENT_ID", agent_id)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| format!("failed to spawn tool: {e}"))?;

    {
        let mut stdin = child.stdin.take().ok_or("failed to open tool stdin")?;
        stdin.write_all(&args_bytes).map_err(|e| format!("failed to write tool arguments: {e}"))?;
    }

    let mut stdout = child.stdout.take().ok_or("failed to open tool stdout")?;
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = vec![0u8; MAX_RESULT_BYTES];
        let mut total = 0usize;
        while total < buf.len() {
            match stdout.read(&mut buf[total..]) {
                Ok(0) => break,
                Ok(n) => total += n,
                Err(_) => break,
            }
        }
        buf.truncate(total);
        let _ = tx.send(buf);
    });

    let deadline = Instant::now() + EXECUTION_TIMEOUT;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Some(status),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(5)),
            Err(e) => return Err(format!("failed to wait for tool: {e}")),
        }
    };

    let output = rx.recv_timeout(Duration::from_millis(200)).map_err(|_| "tool produced no output".to_string())?;
    let status = status.ok_or("tool execution timed out")?;
    if !status.success() {
        return Err(format!("tool exited with status {status}"));
    }
    if output.is_empty() {
        return Err("tool produced no output".to_string());
    }
    serde_json::from_slice(&output).map_err(|e| format!("tool produced invalid JSON: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_registry_is_unavailable() {
        let registry = ToolRegistry::new();
        let paths = Paths::new("/tmp");
        let result = execute_tool(&registry, &paths, "agent-1", "bash", &json!({}));
        assert_eq!(result["error_kind"], json!("registry_unavailable"));
    }

    #[test]
    fn unknown_tool_name_is_not_found() {
        let mut registry = ToolRegistry::new();
        registry.add("bash".into(), "/tools/bash-tool".into(), json!({}));
        let paths = Paths::new("/tmp");
        let result = execute_tool(&registry, &paths, "agent-1", "missing", &json!({}));
        assert_eq!(result["error_kind"], json!("tool_not_found"));
    }
}
