//! Front-matter extraction for Markdown content files.
//!
//! Content files open with a YAML block delimited by `---` lines, followed by
//! the Markdown body. Extraction is a single forward scan over the text and
//! never interprets the body.

use serde::de::DeserializeOwned;

/// Failure to locate the front-matter block. YAML validity is a separate
/// concern handled at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The document does not open with a `---` delimiter line.
    Missing,
    /// The opening `---` is never closed.
    Unclosed,
}

/// Split a document into the raw YAML source of its front-matter block and
/// the Markdown body that follows.
///
/// Leading whitespace (including a UTF-8 BOM) before the opening delimiter is
/// tolerated. The YAML source is returned trimmed; the body keeps everything
/// after the closing delimiter with leading whitespace removed. An empty
/// block (`---` immediately closed) is valid and yields empty YAML source.
pub fn split(content: &str) -> Result<(&str, &str), SplitError> {
    let content = content.trim_start_matches('\u{feff}').trim_start();

    if !content.starts_with("---") {
        return Err(SplitError::Missing);
    }

    let after_open = &content[3..];
    let closing_pos = after_open.find("\n---").ok_or(SplitError::Unclosed)?;

    let yaml = after_open[..closing_pos].trim();
    let body = after_open[closing_pos + 4..].trim_start();

    Ok((yaml, body))
}

/// Parse front-matter YAML source into a key/value mapping.
///
/// Empty or comment-only source yields an empty mapping; a scalar or sequence
/// at the top level is an error.
pub fn parse_mapping(yaml: &str) -> Result<serde_yaml::Mapping, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(serde_yaml::Mapping::new());
    }

    let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
    match value {
        serde_yaml::Value::Null => Ok(serde_yaml::Mapping::new()),
        serde_yaml::Value::Mapping(mapping) => Ok(mapping),
        _ => Err(serde::de::Error::custom("front matter must be a YAML mapping")),
    }
}

/// Deserialize front-matter YAML source into a typed header.
///
/// Routed through [`parse_mapping`] so that an empty block deserializes into
/// a header with every optional field unset.
pub fn parse_header<T: DeserializeOwned>(yaml: &str) -> Result<T, serde_yaml::Error> {
    let mapping = parse_mapping(yaml)?;
    serde_yaml::from_value(serde_yaml::Value::Mapping(mapping))
}
