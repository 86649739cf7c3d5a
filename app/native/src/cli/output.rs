//! CLI output formatting utilities.
//!
//! This module provides utilities for formatting CLI output including:
//! - JSON syntax highlighting
//! - Colored booleans for table cells

use std::fmt::Write as _;

use colored::Colorize;

/// Indentation step for highlighted JSON.
const INDENT: usize = 2;

/// Prints JSON with syntax highlighting.
///
/// Colors:
/// - Keys: Cyan
/// - Strings: Green
/// - Numbers: Yellow
/// - Booleans/Null: Magenta
/// - Brackets/Braces: White (bold)
pub fn print_highlighted_json(value: &serde_json::Value) {
    println!("{}", highlight_json(value));
}

/// Renders a JSON value as pretty-printed, highlighted text.
#[must_use]
pub fn highlight_json(value: &serde_json::Value) -> String {
    let mut out = String::new();
    write_value(value, 0, &mut out);
    out
}

fn write_value(value: &serde_json::Value, depth: usize, out: &mut String) {
    use serde_json::Value;

    match value {
        Value::Null => out.push_str(&"null".magenta().to_string()),
        Value::Bool(b) => out.push_str(&b.to_string().magenta().to_string()),
        Value::Number(n) => out.push_str(&n.to_string().yellow().to_string()),
        Value::String(s) => out.push_str(&quote(s).green().to_string()),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str(&"[]".white().bold().to_string());
                return;
            }
            out.push_str(&"[".white().bold().to_string());
            for (i, item) in items.iter().enumerate() {
                separator(i, depth + 1, out);
                write_value(item, depth + 1, out);
            }
            newline(depth, out);
            out.push_str(&"]".white().bold().to_string());
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str(&"{}".white().bold().to_string());
                return;
            }
            out.push_str(&"{".white().bold().to_string());
            for (i, (key, item)) in map.iter().enumerate() {
                separator(i, depth + 1, out);
                let _ = write!(out, "{}{} ", quote(key).cyan(), ":".white());
                write_value(item, depth + 1, out);
            }
            newline(depth, out);
            out.push_str(&"}".white().bold().to_string());
        }
    }
}

/// Writes the comma (after the first element) and the line break before an element.
fn separator(index: usize, depth: usize, out: &mut String) {
    if index > 0 {
        out.push_str(&",".white().to_string());
    }
    newline(depth, out);
}

fn newline(depth: usize, out: &mut String) {
    out.push('\n');
    out.extend(std::iter::repeat_n(' ', depth * INDENT));
}

/// Quotes and escapes a string the way `serde_json` does.
fn quote(s: &str) -> String { serde_json::Value::String(s.to_string()).to_string() }

/// Formats a boolean as a colored string.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(value: &serde_json::Value) -> String {
        colored::control::set_override(false);
        highlight_json(value)
    }

    #[test]
    fn test_highlight_matches_pretty_layout() {
        let value = serde_json::json!({ "a": [1, 2], "b": { "c": null }, "d": "x" });
        assert_eq!(plain(&value), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_highlight_empty_containers() {
        let value = serde_json::json!({ "a": [], "b": {} });
        assert_eq!(plain(&value), serde_json::to_string_pretty(&value).unwrap());
    }

    #[test]
    fn test_highlight_escapes_strings() {
        let value = serde_json::json!("say \"hi\"\n");
        assert_eq!(plain(&value), "\"say \\\"hi\\\"\\n\"");
    }

    #[test]
    fn test_format_bool_true() {
        let result = format_bool(true);
        assert!(result.contains('✓'));
    }

    #[test]
    fn test_format_bool_false() {
        let result = format_bool(false);
        assert!(result.contains('✗'));
    }
}
