//! gviz response wrapper handling
//!
//! The gviz endpoint returns a JavaScript callback invocation with the actual
//! JSON payload embedded inside. Extraction is positional: everything between
//! the first `{` and the last `}` inclusive.

use crate::{Error, Result};

/// Extract the embedded JSON object from a gviz response body
pub fn extract_embedded_json(body: &str) -> Result<&str> {
    let start = body
        .find('{')
        .ok_or_else(|| Error::connectivity("response wrapper contains no JSON object"))?;
    let end = body
        .rfind('}')
        .ok_or_else(|| Error::connectivity("response wrapper contains no JSON object"))?;

    if end < start {
        return Err(Error::connectivity(
            "response wrapper contains no JSON object",
        ));
    }

    Ok(&body[start..=end])
}
