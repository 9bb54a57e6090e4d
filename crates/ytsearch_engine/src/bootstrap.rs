//! Locates the bootstrap data, API key and request context embedded in a
//! results page by plain substring search.

use serde_json::Value;

use crate::{Marker, UpstreamFormatError};

const SCRIPT_END: &str = "</script>";

#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapData {
    /// Parsed `ytInitialData` tree.
    pub initial_data: Value,
    /// Opaque credential for the continuation endpoint.
    pub api_key: String,
    /// Opaque request context echoed back on continuation calls.
    pub context: Value,
}

pub fn parse_bootstrap(page: &str) -> Result<BootstrapData, UpstreamFormatError> {
    Ok(BootstrapData {
        initial_data: initial_data(page)?,
        api_key: api_key(page)?,
        context: context(page)?,
    })
}

/// Text between the first occurrence of `marker` and the next one (or the end
/// of the page).
fn segment_after(page: &str, marker: Marker) -> Result<&str, UpstreamFormatError> {
    let needle = marker.needle();
    let start = page
        .find(needle)
        .ok_or(UpstreamFormatError::MissingMarker(marker))?
        + needle.len();
    let rest = &page[start..];
    Ok(rest.find(needle).map_or(rest, |end| &rest[..end]))
}

fn parse_json(marker: Marker, text: &str) -> Result<Value, UpstreamFormatError> {
    serde_json::from_str(text).map_err(|err| UpstreamFormatError::InvalidJson {
        marker,
        message: err.to_string(),
    })
}

/// `var ytInitialData = {...};</script>`
fn initial_data(page: &str) -> Result<Value, UpstreamFormatError> {
    let segment = segment_after(page, Marker::InitialData)?;
    let script = segment.split(SCRIPT_END).next().unwrap_or(segment).trim_end();
    let json = script.strip_suffix(';').unwrap_or(script);
    parse_json(Marker::InitialData, json)
}

/// `"innertubeApiKey":"KEY",`
fn api_key(page: &str) -> Result<String, UpstreamFormatError> {
    let segment = segment_after(page, Marker::ApiKey)?;
    segment
        .trim()
        .split(',')
        .next()
        .and_then(|field| field.split('"').nth(2))
        .filter(|key| !key.is_empty())
        .map(str::to_owned)
        .ok_or(UpstreamFormatError::InvalidValue(Marker::ApiKey))
}

/// `"INNERTUBE_CONTEXT":{...},"` up to the next `INNERTUBE_CONTEXT_*` key.
fn context(page: &str) -> Result<Value, UpstreamFormatError> {
    let segment = segment_after(page, Marker::Context)?.trim();
    let json = segment
        .len()
        .checked_sub(2)
        .and_then(|end| segment.get(2..end))
        .ok_or(UpstreamFormatError::InvalidValue(Marker::Context))?;
    parse_json(Marker::Context, json)
}
