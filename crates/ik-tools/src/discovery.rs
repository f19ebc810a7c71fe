//! Directory discovery: scan system, user, and project directories (in that
//! order) for executables whose basename ends in `-tool`, invoke each with
//! `--schema`, and register the ones that answer in time with valid JSON.
//!
//! Later directories override earlier ones by tool name, so the precedence
//! is system < user < project.

use crate::registry::ToolRegistry;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::{Duration, Instant};

const SCHEMA_TIMEOUT: Duration = Duration::from_secs(1);
const MAX_SCHEMA_BYTES: usize = 8192;

fn is_executable(path: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::metadata(path).map(|m| m.is_file() && m.permissions().mode() & 0o100 != 0).unwrap_or(false)
    }
    #[cfg(not(unix))]
    {
        fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
    }
}

/// Strip a trailing `-tool` suffix from a basename and replace `-` with `_`.
fn extract_tool_name(basename: &str) -> String {
    let stripped = basename.strip_suffix("-tool").unwrap_or(basename);
    stripped.replace('-', "_")
}

fn call_tool_schema(path: &Path) -> Option<serde_json::Value> {
    let mut child = Command::new(path)
        .arg("--schema")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .ok()?;

    let mut stdout = child.stdout.take()?;
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let mut buf = vec![0u8; MAX_SCHEMA_BYTES];
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

    let deadline = Instant::now() + SCHEMA_TIMEOUT;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break Some(status),
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                break None;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(5)),
            Err(_) => break None,
        }
    };

    let output = rx.recv_timeout(Duration::from_millis(100)).ok()?;
    let status = status?;
    if !status.success() || output.is_empty() {
        return None;
    }
    serde_json::from_slice(&output).ok()
}

fn scan_directory(dir: &Path, registry: &mut ToolRegistry) {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return;
    };
    for entry in read_dir.flatten() {
        let path = entry.path();
        let Some(basename) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !basename.ends_with("-tool") || !is_executable(&path) {
            continue;
        }
        let Some(schema) = call_tool_schema(&path) else {
            tracing::debug!(tool = basename, "schema probe failed, skipping");
            continue;
        };
        let name = extract_tool_name(basename);
        registry.add(name, path.display().to_string(), schema);
    }
}

/// Scan system, user, and project directories in that precedence order.
/// Missing directories are not an error.
pub fn discover(system_dir: &Path, user_dir: &Path, project_dir: &Path, registry: &mut ToolRegistry) {
    scan_directory(system_dir, registry);
    scan_directory(user_dir, registry);
    scan_directory(project_dir, registry);
}
