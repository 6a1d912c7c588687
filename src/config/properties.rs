//! Reader for extension descriptor files.
//!
//! Extension descriptors are Java-style `.properties` files. Only the subset
//! that descriptors actually use is supported:
//!
//! - `#` and `!` comment lines
//! - `key=value`, `key: value` and `key value` separators
//! - backslash line continuations (leading whitespace of the next line is dropped)
//! - `\t`, `\n`, `\r`, `\f` and `\uXXXX` escapes
//!
//! Keys and values are trimmed. When a key repeats, the later value wins.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse `.properties` content into an ordered map.
///
/// # Examples
///
/// ```rust
/// use app_model::config::parse_properties;
///
/// let props = parse_properties(
///     "# comment\nparent-first-artifacts = org.acme:a,\\\n    org.acme:b\n",
/// );
/// assert_eq!(props["parent-first-artifacts"], "org.acme:a,org.acme:b");
/// ```
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut properties = BTreeMap::new();
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        let line = line.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut logical = line.to_string();
        while continues(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        properties.insert(unescape(key).trim().to_string(), unescape(value).trim().to_string());
    }

    properties
}

/// Read and parse a descriptor file.
pub fn load_properties(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read extension descriptor: {}", path.display()))?;
    Ok(parse_properties(&content))
}

/// An odd number of trailing backslashes joins the next line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line at the first unescaped separator.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    for (index, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || c.is_whitespace() {
            let key = &line[..index];
            let rest = line[index..].trim_start();
            let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
            return (key, rest);
        }
    }
    (line, "")
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push('u');
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
