use crate::shared::error::SentinelError;
use crate::shared::Result;
use std::fmt;

/// A client location: a path plus an ordered list of query parameters.
///
/// Locations are what the user passes on the command line and what the
/// client prints back when a session is left, so they round-trip through
/// `parse` and `Display` without losing any parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Vec<(String, String)>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Builder-style helper that appends one query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Parses a location string.
    ///
    /// Accepts a bare location (`/role?name=Acme`) or a full URL, in which
    /// case scheme and host are dropped. Fragments are ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let without_origin = strip_origin(trimmed);
        let without_fragment = without_origin
            .split_once('#')
            .map(|(before, _)| before)
            .unwrap_or(without_origin);

        let (raw_path, raw_query) = match without_fragment.split_once('?') {
            Some((path, query)) => (path, query),
            None => (without_fragment, ""),
        };

        let path = if raw_path.is_empty() { "/" } else { raw_path };
        if !path.starts_with('/') {
            return Err(SentinelError::InvalidLocation {
                location: input.to_string(),
                reason: "path must start with '/'".to_string(),
            }
            .into());
        }

        let mut query = Vec::new();
        for pair in raw_query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.push((decode_component(input, key)?, decode_component(input, value)?));
        }

        Ok(Self {
            path: normalize_path(path),
            query,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Path split into its non-empty segments.
    pub fn segments(&self) -> Vec<&str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// First value for `key`, if present.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{}{}={}",
                separator,
                urlencoding::encode(key),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn strip_origin(input: &str) -> &str {
    for scheme in ["http://", "https://"] {
        if let Some(rest) = input.strip_prefix(scheme) {
            return match rest.find(|c: char| c == '/' || c == '?') {
                Some(idx) => &rest[idx..],
                None => "/",
            };
        }
    }
    input
}

/// Collapses a trailing slash so `/role/` and `/role` are the same location.
fn normalize_path(path: &str) -> String {
    if path.len() > 1 {
        path.trim_end_matches('/').to_string()
    } else {
        path.to_string()
    }
}

fn decode_component(location: &str, raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            SentinelError::InvalidLocation {
                location: location.to_string(),
                reason: format!("query is not valid UTF-8 after decoding: {}", e),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_only() {
        let location = Location::parse("/role").unwrap();
        assert_eq!(location.path(), "/role");
        assert!(location.params().is_empty());
    }

    #[test]
    fn test_parse_query_decodes_values() {
        let location = Location::parse("/role?name=Acme%20Suite&size=10-100").unwrap();
        assert_eq!(location.param("name"), Some("Acme Suite"));
        assert_eq!(location.param("size"), Some("10-100"));
        assert_eq!(location.param("risk"), None);
    }

    #[test]
    fn test_parse_plus_as_space() {
        let location = Location::parse("/role?name=Acme+Suite").unwrap();
        assert_eq!(location.param("name"), Some("Acme Suite"));
    }

    #[test]
    fn test_parse_full_url_drops_origin() {
        let location = Location::parse("https://sentinel.example.com/risk?name=Slack").unwrap();
        assert_eq!(location.path(), "/risk");
        assert_eq!(location.param("name"), Some("Slack"));

        let bare_host = Location::parse("http://localhost:5000").unwrap();
        assert_eq!(bare_host.path(), "/");
    }

    #[test]
    fn test_parse_empty_is_root() {
        assert_eq!(Location::parse("").unwrap().path(), "/");
        assert_eq!(Location::parse("?role=security").unwrap().path(), "/");
    }

    #[test]
    fn test_parse_rejects_relative_path() {
        let result = Location::parse("role");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_parse_ignores_fragment_and_trailing_slash() {
        let location = Location::parse("/size/?name=a#top").unwrap();
        assert_eq!(location.path(), "/size");
        assert_eq!(location.param("name"), Some("a"));
    }

    #[test]
    fn test_display_encodes_values() {
        let location = Location::new("/role")
            .with_param("name", "Acme Suite & Co")
            .with_param("role", "security");
        assert_eq!(
            location.to_string(),
            "/role?name=Acme%20Suite%20%26%20Co&role=security"
        );
    }

    #[test]
    fn test_display_then_parse_keeps_params() {
        let location = Location::new("/risk")
            .with_param("name", "Zoom / Video?")
            .with_param("size", "100+");
        let reparsed = Location::parse(&location.to_string()).unwrap();
        assert_eq!(reparsed, location);
    }

    #[test]
    fn test_segments() {
        let location = Location::parse("/assessments/abc123").unwrap();
        assert_eq!(location.segments(), vec!["assessments", "abc123"]);
    }
}
