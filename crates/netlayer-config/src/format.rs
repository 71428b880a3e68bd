//! Source formats for override files, chosen by file extension.
//!
//! - `.json` is plain data.
//! - `.toml` is evaluated: string values may reference the environment with
//!   `${VAR}` or `${VAR:-fallback}`. `$${` escapes a literal `${`. Datetimes
//!   become RFC 3339 strings, since JSON has no datetime type.

use netlayer_core::OverrideFile;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Environment variable lookup used while evaluating a source.
pub type EnvLookup = dyn Fn(&str) -> Option<String>;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$\{|\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
        .expect("placeholder pattern is valid")
});

/// A way of turning file contents into an [`OverrideFile`].
pub trait SourceFormat: Sync {
    /// Human-readable format name, used in logs.
    fn name(&self) -> &'static str;

    /// File extension (without the dot) this format handles.
    fn extension(&self) -> &'static str;

    /// Parse `raw` into the override shape. Errors are reported as plain
    /// strings; the loader attaches the file path.
    fn parse(&self, raw: &str, env: &EnvLookup) -> Result<OverrideFile, String>;
}

/// Static JSON data file.
pub struct JsonFormat;

impl SourceFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn parse(&self, raw: &str, _env: &EnvLookup) -> Result<OverrideFile, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }
}

/// TOML evaluated against the environment.
pub struct TomlFormat;

impl SourceFormat for TomlFormat {
    fn name(&self) -> &'static str {
        "toml"
    }

    fn extension(&self) -> &'static str {
        "toml"
    }

    fn parse(&self, raw: &str, env: &EnvLookup) -> Result<OverrideFile, String> {
        let table: toml::Table = toml::from_str(raw).map_err(|e| e.to_string())?;
        let mut value = to_json(toml::Value::Table(table), "")?;
        interpolate_value(&mut value, "", env)?;
        serde_json::from_value(value).map_err(|e| e.to_string())
    }
}

/// Supported formats, in probe order.
pub static FORMATS: &[&dyn SourceFormat] = &[&TomlFormat, &JsonFormat];

/// Find the format handling `extension` (case-insensitive).
pub fn for_extension(extension: &str) -> Option<&'static dyn SourceFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|f| f.extension().eq_ignore_ascii_case(extension))
}

/// Expand `${VAR}` and `${VAR:-fallback}` placeholders in `input`.
///
/// A fallback is used when the variable is unset or empty. A placeholder
/// without a fallback requires the variable to be set.
pub fn interpolate(input: &str, env: &EnvLookup) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(input) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&input[last..whole.start()]);
        last = whole.end();

        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            // `$${`
            out.push_str("${");
            continue;
        };

        let value = env(name);
        match caps.get(2) {
            Some(fallback) => {
                let value = value.filter(|v| !v.is_empty());
                out.push_str(value.as_deref().unwrap_or(fallback.as_str()));
            }
            None => {
                let value =
                    value.ok_or_else(|| format!("environment variable '{name}' is not set"))?;
                out.push_str(&value);
            }
        }
    }

    out.push_str(&input[last..]);
    Ok(out)
}

fn child_path(at: &str, key: &str) -> String {
    if at.is_empty() {
        key.to_string()
    } else {
        format!("{at}.{key}")
    }
}

fn to_json(value: toml::Value, at: &str) -> Result<Value, String> {
    Ok(match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .ok_or_else(|| format!("{at}: {f} has no JSON representation"))?,
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| to_json(item, &format!("{at}[{i}]")))
                .collect::<Result<_, _>>()?,
        ),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, item)| {
                    let item = to_json(item, &child_path(at, &key))?;
                    Ok::<_, String>((key, item))
                })
                .collect::<Result<_, _>>()?,
        ),
    })
}

fn interpolate_value(value: &mut Value, at: &str, env: &EnvLookup) -> Result<(), String> {
    match value {
        Value::String(s) if s.contains('$') => {
            *s = interpolate(s, env).map_err(|e| format!("{at}: {e}"))?;
        }
        Value::Array(items) => {
            for (i, item) in items.iter_mut().enumerate() {
                interpolate_value(item, &format!("{at}[{i}]"), env)?;
            }
        }
        Value::Object(map) => {
            for (key, item) in map.iter_mut() {
                interpolate_value(item, &child_path(at, key), env)?;
            }
        }
        _ => {}
    }
    Ok(())
}
