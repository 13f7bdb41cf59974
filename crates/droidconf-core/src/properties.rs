//! Loading of `local.properties` style files.
//!
//! Supports the subset of the Java properties format that appears in real
//! Android projects: `key=value` and `key:value` pairs, `#` and `!`
//! comments, trailing-backslash continuation lines, and backslash escapes
//! (including `\uXXXX`, with UTF-16 surrogate pairs combined).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use droidconf_util::errors::{ConfigError, ConfigResult};

/// A parsed properties file.
///
/// Remembers whether the backing file existed so lookups can tell a missing
/// file apart from a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    path: Option<PathBuf>,
    present: bool,
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Load a properties file. An absent file yields an empty set that
    /// reports [`Properties::exists`] as `false`.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        match droidconf_util::fs::read_optional(path)? {
            Some(content) => {
                let mut props = Self::parse(&content);
                props.path = Some(path.to_path_buf());
                tracing::debug!("loaded {} properties from {}", props.len(), path.display());
                Ok(props)
            }
            None => {
                tracing::debug!("properties file {} does not exist", path.display());
                Ok(Self {
                    path: Some(path.to_path_buf()),
                    present: false,
                    entries: BTreeMap::new(),
                })
            }
        }
    }

    /// Parse properties from text.
    pub fn parse(content: &str) -> Self {
        let mut entries = BTreeMap::new();
        let mut lines = content.lines();
        while let Some(line) = lines.next() {
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                continue;
            }
            let mut logical = trimmed.to_string();
            while ends_with_continuation(&logical) {
                logical.pop();
                match lines.next() {
                    Some(next) => logical.push_str(next.trim_start()),
                    None => break,
                }
            }
            let (key, value) = split_key_value(&logical);
            entries.insert(unescape(key), unescape(value));
        }
        Self {
            path: None,
            present: true,
            entries,
        }
    }

    /// Build an in-memory property set from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            path: None,
            present: true,
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Whether the backing file existed when loaded.
    pub fn exists(&self) -> bool {
        self.present
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key that has no fallback.
    ///
    /// Fails with [`ConfigError::FileNotFound`] when the file itself was
    /// absent, otherwise with [`ConfigError::MissingRequiredKey`].
    pub fn require(&self, key: &str) -> ConfigResult<&str> {
        if let Some(value) = self.get(key) {
            return Ok(value);
        }
        if !self.present {
            return Err(ConfigError::FileNotFound {
                path: self.path.clone().unwrap_or_default(),
                key: key.to_string(),
            });
        }
        Err(ConfigError::missing(key, self.origin()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Human-readable name of where these properties came from.
    pub fn origin(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "properties".to_string(),
        }
    }
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

const WHITESPACE: [char; 3] = [' ', '\t', '\u{c}'];

/// Split a logical line at the first unescaped `=`, `:` or whitespace.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' | ' ' | '\t' | '\u{c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }
    let rest = line[key_end..].trim_start_matches(WHITESPACE);
    let rest = rest.strip_prefix(['=', ':']).unwrap_or(rest);
    (&line[..key_end], rest.trim_start_matches(WHITESPACE))
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
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                let Some(unit) = parse_hex4(&hex) else {
                    out.push_str("\\u");
                    out.push_str(&hex);
                    continue;
                };
                if (0xD800..0xDC00).contains(&unit) {
                    let mut ahead = chars.clone();
                    if ahead.next() == Some('\\') && ahead.next() == Some('u') {
                        let low_hex: String = ahead.by_ref().take(4).collect();
                        let combined = parse_hex4(&low_hex)
                            .filter(|low| (0xDC00..0xE000).contains(low))
                            .and_then(|low| {
                                char::from_u32(0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00))
                            });
                        if let Some(decoded) = combined {
                            out.push(decoded);
                            chars = ahead;
                            continue;
                        }
                    }
                }
                match char::from_u32(unit) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
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

/// Four hex digits as a UTF-16 code unit.
fn parse_hex4(hex: &str) -> Option<u32> {
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
