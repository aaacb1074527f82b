//! Common types shared by the router, the dispatcher and host adapters

use crate::{RouterError, RouterResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP verb a route is declared for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
    /// PATCH
    Patch,
}

impl Verb {
    /// Every supported verb, in the default resolution order.
    pub const ALL: [Verb; 5] = [Verb::Get, Verb::Post, Verb::Put, Verb::Patch, Verb::Delete];

    /// Returns the upper-case name of the verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            _ => Err(RouterError::unsupported_verb(s)),
        }
    }
}

impl TryFrom<&str> for Verb {
    type Error = RouterError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Response produced by a controller action
pub type Response = serde_json::Value;

/// Positional arguments handed to a controller action.
///
/// Front-end routes receive one value per `{placeholder}`, in the order the
/// placeholders appear in the pattern. Admin pages and form submissions
/// receive no arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    values: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    names: Vec<String>,
}

impl Params {
    /// Empty parameter list
    pub fn none() -> Self {
        Self::default()
    }

    /// Build params from positional values.
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            names: Vec::new(),
        }
    }

    /// Attach the placeholder names the values were captured for.
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    /// Raw value at `index`
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Parse the value at `index`.
    ///
    /// Fails with `BAD_REQUEST` when the value is missing or does not parse.
    pub fn parse<T: FromStr>(&self, index: usize) -> RouterResult<T> {
        let raw = self.get(index).ok_or_else(|| {
            RouterError::bad_request(format!("Missing route parameter at position {}", index))
        })?;
        raw.parse().map_err(|_| {
            let name = self.names.get(index).map(String::as_str).unwrap_or("?");
            RouterError::bad_request(format!(
                "Route parameter '{}' has invalid value '{}'",
                name, raw
            ))
        })
    }

    /// Placeholder names, when known
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All positional values
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were captured
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<String>> for Params {
    fn from(values: Vec<String>) -> Self {
        Self::new(values)
    }
}

/// Generic success response for form-submission actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true` for the constructors below
    pub success: bool,
    /// Optional message for the host's admin notice
    pub message: Option<String>,
}

impl SuccessResponse {
    /// Success with a message, e.g. `SuccessResponse::ok("Book saved")`
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    /// Success without a message
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouterErrorCode;

    #[test]
    fn test_verb_parse_is_case_insensitive() {
        assert_eq!("get".parse::<Verb>().unwrap(), Verb::Get);
        assert_eq!("Patch".parse::<Verb>().unwrap(), Verb::Patch);
        assert_eq!(" DELETE ".parse::<Verb>().unwrap(), Verb::Delete);
    }

    #[test]
    fn test_verb_parse_rejects_unknown() {
        let err = "OPTIONS".parse::<Verb>().unwrap_err();
        assert_eq!(err.code, RouterErrorCode::UnsupportedVerb);
        assert!(err.message.contains("OPTIONS"));
    }

    #[test]
    fn test_verb_serializes_upper_case() {
        assert_eq!(serde_json::to_value(Verb::Put).unwrap(), "PUT");
    }

    #[test]
    fn test_params_parse() {
        let params = Params::new(vec!["42".into(), "abc".into()])
            .with_names(vec!["id".into(), "slug".into()]);
        assert_eq!(params.parse::<u32>(0).unwrap(), 42);

        let err = params.parse::<u32>(1).unwrap_err();
        assert_eq!(err.code, RouterErrorCode::BadRequest);
        assert!(err.message.contains("slug"));

        let err = params.parse::<u32>(2).unwrap_err();
        assert_eq!(err.code, RouterErrorCode::BadRequest);
    }

    #[test]
    fn test_success_response_shape() {
        assert_eq!(
            serde_json::to_value(SuccessResponse::ok("Book saved")).unwrap(),
            serde_json::json!({"success": true, "message": "Book saved"})
        );
        assert_eq!(
            serde_json::to_value(SuccessResponse::success()).unwrap(),
            serde_json::json!({"success": true, "message": null})
        );
    }
}
