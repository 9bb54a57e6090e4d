//! Typed lookups over untyped render nodes.
//!
//! Every field path is a JSON pointer. A JSON `null` anywhere along the path is
//! treated the same as an absent key.

use serde::Deserialize;
use serde_json::Value;

use crate::{LookupError, Thumbnail};

/// A render node together with the renderer key it was found under, so that
/// lookup failures can name it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Node<'a> {
    renderer: &'static str,
    value: &'a Value,
}

impl<'a> Node<'a> {
    pub(crate) fn new(renderer: &'static str, value: &'a Value) -> Self {
        Self { renderer, value }
    }

    /// The non-null child of `item` stored under `renderer`, if any.
    pub(crate) fn child(item: &'a Value, renderer: &'static str) -> Option<Self> {
        item.get(renderer)
            .filter(|value| !value.is_null())
            .map(|value| Self::new(renderer, value))
    }

    pub(crate) fn renderer(&self) -> &'static str {
        self.renderer
    }

    pub(crate) fn get(&self, path: &str) -> Option<&'a Value> {
        self.value.pointer(path).filter(|value| !value.is_null())
    }

    pub(crate) fn require(&self, path: &'static str) -> Result<&'a Value, LookupError> {
        self.get(path).ok_or(LookupError::Missing {
            renderer: self.renderer,
            path,
        })
    }

    pub(crate) fn optional_str(&self, path: &str) -> Option<&'a str> {
        self.get(path).and_then(Value::as_str)
    }

    /// A string that is present and nonempty.
    pub(crate) fn nonempty_str(&self, path: &str) -> Option<&'a str> {
        self.optional_str(path).filter(|text| !text.is_empty())
    }

    pub(crate) fn require_str(&self, path: &'static str) -> Result<&'a str, LookupError> {
        let value = self.require(path)?;
        value
            .as_str()
            .ok_or_else(|| self.shape(path, format!("expected string, found {}", kind_of(value))))
    }

    pub(crate) fn optional_array(&self, path: &str) -> Option<&'a [Value]> {
        self.get(path).and_then(Value::as_array).map(Vec::as_slice)
    }

    pub(crate) fn require_array(&self, path: &'static str) -> Result<&'a [Value], LookupError> {
        let value = self.require(path)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.shape(path, format!("expected array, found {}", kind_of(value))))
    }

    pub(crate) fn thumbnails(&self, path: &'static str) -> Result<Vec<Thumbnail>, LookupError> {
        let value = self.require(path)?;
        Vec::<Thumbnail>::deserialize(value).map_err(|err| self.shape(path, err.to_string()))
    }

    /// Concatenates the `text` of every run at `path`, in order and without a
    /// separator. An empty run list is an error.
    pub(crate) fn joined_runs(&self, path: &'static str) -> Result<String, LookupError> {
        let runs = self.require_array(path)?;
        if runs.is_empty() {
            return Err(self.shape(path, "empty run list"));
        }
        runs.iter().try_fold(String::new(), |mut acc, run| {
            let text = run
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| self.shape(path, "run without text"))?;
            acc.push_str(text);
            Ok(acc)
        })
    }

    pub(crate) fn shape(&self, path: &'static str, message: impl Into<String>) -> LookupError {
        LookupError::Shape {
            renderer: self.renderer,
            path,
            message: message.into(),
        }
    }
}

/// The renderer key naming an item node: its first key in document order,
/// when it is an object.
pub(crate) fn renderer_name(item: &Value) -> &str {
    item.as_object()
        .and_then(|map| map.keys().next())
        .map(String::as_str)
        .unwrap_or("<non-object>")
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
