// src/payload/splice.rs
//! Injecting junk fields into raw HTTP request text
//!
//! [`try_splice`] does the real work and reports failures as errors.
//! [`splice`] turns any failure into [`SpliceOutcome::Fallback`], which still
//! carries a usable request so the caller always has something to print.

use crate::error::NowafError;
use crate::payload::filler::JunkField;
use serde::Deserialize;
use serde_json::Value;

pub const CRLF_SEPARATOR: &str = "\r\n\r\n";
pub const LF_SEPARATOR: &str = "\n\n";

/// Value of the `status` field added next to junk data
pub const STATUS_ACCEPTED: &str = "accepted";

/// Deepest array/object nesting a body may have before merging gives up
pub const MAX_BODY_DEPTH: usize = 1000;

/// How the junk field is placed into the request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceMode {
    /// Parse the body and merge the junk field into it
    Merge,
    /// Append `{key: value}` after a separator without looking at the body (legacy)
    Append,
}

/// Request text split at the first blank line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestParts<'a> {
    pub headers: &'a str,
    pub body: &'a str,
    pub separator: &'static str,
}

impl<'a> RequestParts<'a> {
    /// `\r\n\r\n` is preferred over `\n\n`; with neither, the whole text is headers
    pub fn split(request: &'a str) -> Self {
        for separator in [CRLF_SEPARATOR, LF_SEPARATOR] {
            if let Some((headers, body)) = request.split_once(separator) {
                return Self { headers, body, separator };
            }
        }

        Self {
            headers: request,
            body: "",
            separator: CRLF_SEPARATOR,
        }
    }

    fn join(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.headers.len() + self.separator.len() + body.len());
        out.push_str(self.headers);
        out.push_str(self.separator);
        out.push_str(body);
        out
    }
}

/// Result of splicing, with the fallback path made explicit
#[derive(Debug)]
pub enum SpliceOutcome {
    Spliced(String),
    Fallback { text: String, reason: NowafError },
}

impl SpliceOutcome {
    /// Keep a successful attempt, or build the append-only fallback for a failed one
    pub fn from_attempt(request: &str, junk: &JunkField, attempt: Result<String, NowafError>) -> Self {
        match attempt {
            Ok(text) => SpliceOutcome::Spliced(text),
            Err(reason) => SpliceOutcome::Fallback {
                text: fallback_append(request, junk),
                reason,
            },
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, SpliceOutcome::Fallback { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            SpliceOutcome::Spliced(text) => text,
            SpliceOutcome::Fallback { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            SpliceOutcome::Spliced(text) => text,
            SpliceOutcome::Fallback { text, .. } => text,
        }
    }
}

pub fn splice(request: &str, junk: &JunkField, mode: SpliceMode) -> SpliceOutcome {
    let outcome = SpliceOutcome::from_attempt(request, junk, try_splice(request, junk, mode));
    if let SpliceOutcome::Fallback { ref reason, .. } = outcome {
        tracing::warn!(error = %reason, "splice failed, appended junk body instead");
    }
    outcome
}

pub fn try_splice(request: &str, junk: &JunkField, mode: SpliceMode) -> Result<String, NowafError> {
    match mode {
        SpliceMode::Merge => merge_junk(request, junk),
        SpliceMode::Append => append_junk(request, junk),
    }
}

/// Merge the junk field into whatever body the request carries
pub fn merge_junk(request: &str, junk: &JunkField) -> Result<String, NowafError> {
    let parts = RequestParts::split(request);

    if parts.body.trim().is_empty() {
        tracing::debug!("no body found, creating a new JSON body");
        let body = serde_json::to_string(&junk.to_status_object())?;
        return Ok(parts.join(&body));
    }

    let depth = nesting_depth(parts.body);
    if depth > MAX_BODY_DEPTH {
        return Err(NowafError::Splice(format!(
            "body nesting depth {} exceeds {}",
            depth, MAX_BODY_DEPTH
        )));
    }

    let parsed = match parse_body(parts.body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "body is not JSON, appending JSON after it");
            let trailer = serde_json::to_string(&junk.to_status_object())?;
            let body = format!("{}\n{}", parts.body, trailer);
            return Ok(parts.join(&body));
        }
    };

    let merged = match parsed {
        Value::Object(mut object) => {
            tracing::debug!(fields = object.len(), "merging into JSON object body");
            object
                .entry("status")
                .or_insert_with(|| Value::from(STATUS_ACCEPTED));
            object.insert(junk.key.clone(), Value::String(junk.value.clone()));
            Value::Object(object)
        }
        Value::Array(mut items) => {
            tracing::debug!(items = items.len(), "appending to JSON array body");
            items.push(Value::Object(junk.to_object()));
            Value::Array(items)
        }
        other => {
            tracing::debug!("wrapping scalar JSON body");
            let mut object = serde_json::Map::new();
            object.insert("original".to_string(), other);
            object.insert(junk.key.clone(), Value::String(junk.value.clone()));
            Value::Object(object)
        }
    };

    Ok(parts.join(&serde_json::to_string(&merged)?))
}

/// Parse without serde_json's 128-level recursion limit; callers bound depth first
fn parse_body(body: &str) -> Result<Value, serde_json::Error> {
    let mut de = serde_json::Deserializer::from_str(body);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)?;
    de.end()?;
    Ok(value)
}

/// Maximum `[`/`{` nesting outside string literals
pub fn nesting_depth(body: &str) -> usize {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in body.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    max_depth
}

/// Legacy mode: `request + separator + {key: value}`
pub fn append_junk(request: &str, junk: &JunkField) -> Result<String, NowafError> {
    let separator = if request.contains(CRLF_SEPARATOR) {
        CRLF_SEPARATOR
    } else {
        LF_SEPARATOR
    };
    let body = serde_json::to_string(&junk.to_object())?;
    Ok(format!("{}{}{}", request, separator, body))
}

/// Last-resort body used when a splice attempt fails
pub fn fallback_append(request: &str, junk: &JunkField) -> String {
    let body = Value::Object(junk.to_status_object()).to_string();
    format!("{}{}{}", request, LF_SEPARATOR, body)
}
