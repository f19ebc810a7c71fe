//! Building the text of a transcript line before it is handed to
//! [`ik_scrollback::Scrollback::append_line`]. This sits between the event
//! source (model/tool output) and the scrollback's storage model; it never
//! changes what scrollback stores, only what string gets appended.

use ik_text::output_style::{ANSI_RESET, OutputCategory};
use ik_text::fg_256;
use serde_json::Value;

const MAX_TOOL_SUMMARY_CHARS: usize = 400;
const MAX_TOOL_SUMMARY_LINES: usize = 3;

/// Prefix (and, if enabled, color) a plain transcript line with its
/// category's glyph.
pub fn format_plain(category: OutputCategory, text: &str, colors_enabled: bool) -> String {
    let prefix = category.prefix().unwrap_or("");
    let lead = if prefix.is_empty() { String::new() } else { format!("{prefix} ") };
    match category.color() {
        Some(color) if colors_enabled => format!("{}{lead}{text}{ANSI_RESET}", fg_256(color)),
        _ => format!("{lead}{text}"),
    }
}

/// Summarize a tool call as `name key=value, key=value`, truncated to at
/// most [`MAX_TOOL_SUMMARY_LINES`] lines and [`MAX_TOOL_SUMMARY_CHARS`]
/// characters with a trailing `...` if truncation occurred.
pub fn format_tool_request(call: &Value, colors_enabled: bool) -> String {
    let name = call
        .get("tool_name")
        .or_else(|| call.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("unknown_tool");
    let args = call.get("tool_args").or_else(|| call.get("arguments"));
    let args_summary = args.map(summarize_args).unwrap_or_default();
    let text = if args_summary.is_empty() {
        name.to_string()
    } else {
        format!("{name} {args_summary}")
    };
    format_plain(OutputCategory::ToolRequest, &truncate(&text), colors_enabled)
}

pub fn format_tool_response(result: &Value, colors_enabled: bool) -> String {
    let output = result
        .get("output")
        .map(|v| v.to_string())
        .unwrap_or_else(|| result.to_string());
    format_plain(OutputCategory::ToolResponse, &truncate(&output), colors_enabled)
}

fn summarize_args(args: &Value) -> String {
    let Some(obj) = args.as_object() else {
        return args.to_string();
    };
    obj.iter()
        .map(|(k, v)| format!("{k}={}", summarize_value(v)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_value(v: &Value) -> String {
    match v {
        Value::Array(items) => items.iter().map(summarize_value).collect::<Vec<_>>().join(", "),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn truncate(text: &str) -> String {
    let line_truncated: String = text
        .split('\n')
        .take(MAX_TOOL_SUMMARY_LINES)
        .collect::<Vec<_>>()
        .join("\n");
    let lines_dropped = text.split('\n').count() > MAX_TOOL_SUMMARY_LINES;

    if line_truncated.chars().count() > MAX_TOOL_SUMMARY_CHARS {
        let clipped: String = line_truncated.chars().take(MAX_TOOL_SUMMARY_CHARS).collect();
        format!("{clipped}...")
    } else if lines_dropped {
        format!("{line_truncated}...")
    } else {
        line_truncated
    }
}
