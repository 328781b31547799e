use std::borrow::Cow;
use std::fmt::Display;

use url::form_urlencoded::byte_serialize;

/// Ordered query-string builder.
///
/// Keys are written as given (so `events[]` stays literal); values are
/// percent-encoded. Pairs keep insertion order.
#[derive(Debug, Default)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pair(mut self, key: &'static str, value: impl Display) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Repeat `key` once per value.
    pub(crate) fn repeated<I>(mut self, key: &'static str, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        for value in values {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append the encoded pairs to `path`, or return `path` unchanged when empty.
    pub(crate) fn to_path(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        format!("{path}?{}", self.encode())
    }

    fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(key, value)| {
                let value: String = byte_serialize(value.as_bytes()).collect();
                format!("{key}={value}")
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode a caller-supplied id for use as a single path segment.
pub(crate) fn segment(id: &str) -> Cow<'_, str> {
    urlencoding::encode(id)
}
