//! Key/value request arguments and their `key=value&...` rendering.
//!
//! The same rendering is used for a GET query string and for a POST
//! `application/x-www-form-urlencoded` body.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

/// How keys and values are written into a query string or form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgEncoding {
    /// Percent-encode every byte outside the unreserved set and `/`.
    #[default]
    Percent,
    /// Write keys and values unchanged.
    Raw,
}

/// Request arguments in insertion order.
///
/// Inserting a key that is already present replaces its value and keeps the
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestArgs(Vec<(String, String)>);

impl RequestArgs {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `k1=v1&k2=v2`. Empty args render as an empty string.
    pub fn encode(&self, encoding: ArgEncoding) -> String {
        let mut out = String::new();
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            match encoding {
                ArgEncoding::Percent => {
                    out.push_str(&percent_encode(key));
                    out.push('=');
                    out.push_str(&percent_encode(value));
                }
                ArgEncoding::Raw => {
                    out.push_str(key);
                    out.push('=');
                    out.push_str(value);
                }
            }
        }
        out
    }
}

impl<K, V> FromIterator<(K, V)> for RequestArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = RequestArgs::new();
        for (k, v) in iter {
            args.insert(k, v);
        }
        args
    }
}

/// Percent-encodes the UTF-8 bytes of `text`, keeping `/` and the RFC 3986
/// unreserved characters.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for &b in text.as_bytes() {
        let keep = b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~' | b'/');
        if keep {
            out.push(char::from(b));
        } else {
            // Writing into a String cannot fail.
            let _ = write!(out, "%{b:02X}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_pairs_in_insertion_order() {
        let args: RequestArgs = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(args.encode(ArgEncoding::Percent), "b=2&a=1");
    }

    #[test]
    fn empty_args_encode_to_empty_string() {
        assert_eq!(RequestArgs::new().encode(ArgEncoding::Percent), "");
        assert_eq!(RequestArgs::new().encode(ArgEncoding::Raw), "");
    }

    #[test]
    fn insert_replaces_existing_key_in_place() {
        let mut args = RequestArgs::new();
        args.insert("a", "1");
        args.insert("b", "2");
        args.insert("a", "3");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some("3"));
        assert_eq!(args.encode(ArgEncoding::Raw), "a=3&b=2");
    }

    #[test]
    fn percent_encoding_matches_quote_defaults() {
        let args: RequestArgs = [("a b", "x&y=z/é~")].into_iter().collect();
        assert_eq!(args.encode(ArgEncoding::Percent), "a%20b=x%26y%3Dz/%C3%A9~");
    }

    #[test]
    fn raw_encoding_leaves_text_alone() {
        let args: RequestArgs = [("a b", "x&y")].into_iter().collect();
        assert_eq!(args.encode(ArgEncoding::Raw), "a b=x&y");
    }
}
