use serde_json::Value;

use crate::error::{TransformError, TransformResult};

/// Raw post - a post record exactly as the social-media API returned it.
///
/// Fields are looked up lazily: nothing is validated until an accessor asks
/// for it, and a missing key is reported with its full dotted path.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPost(Value);

impl RawPost {
    /// Wrap an already-parsed JSON document. Only objects are accepted.
    pub fn new(value: Value) -> TransformResult<Self> {
        if value.is_object() {
            Ok(Self(value))
        } else {
            Err(TransformError::InvalidJson(
                "post record must be a JSON object".to_string(),
            ))
        }
    }

    /// Parse a post from JSON text.
    pub fn from_json_str(input: &str) -> TransformResult<Self> {
        Self::new(serde_json::from_str(input)?)
    }

    /// The underlying JSON document.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Look up a dotted path such as `user.followers_count`.
    pub fn field(&self, path: &str) -> TransformResult<&Value> {
        path.split('.')
            .try_fold(&self.0, |node, key| node.as_object().and_then(|obj| obj.get(key)))
            .ok_or_else(|| TransformError::missing(path))
    }

    pub fn u64_field(&self, path: &str) -> TransformResult<u64> {
        self.field(path)?
            .as_u64()
            .ok_or_else(|| TransformError::invalid(path, "a non-negative integer"))
    }

    pub fn str_field(&self, path: &str) -> TransformResult<&str> {
        self.field(path)?
            .as_str()
            .ok_or_else(|| TransformError::invalid(path, "a string"))
    }

    pub fn array_field(&self, path: &str) -> TransformResult<&[Value]> {
        self.field(path)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| TransformError::invalid(path, "an array"))
    }
}

impl TryFrom<Value> for RawPost {
    type Error = TransformError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_field_lookup() {
        let post = RawPost::new(json!({"user": {"followers_count": 12}})).unwrap();
        assert_eq!(post.u64_field("user.followers_count").unwrap(), 12);
    }

    #[test]
    fn test_missing_field_reports_full_path() {
        let post = RawPost::new(json!({"user": {}})).unwrap();
        match post.field("user.friends_count") {
            Err(TransformError::MissingField { path }) => assert_eq!(path, "user.friends_count"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_scalar_on_path_is_missing() {
        let post = RawPost::new(json!({"user": 7})).unwrap();
        assert!(matches!(
            post.field("user.id"),
            Err(TransformError::MissingField { .. })
        ));
    }

    #[test]
    fn test_wrong_type_is_invalid() {
        let post = RawPost::new(json!({"id": "42", "retweet_count": -1})).unwrap();
        assert!(matches!(
            post.u64_field("id"),
            Err(TransformError::InvalidField { .. })
        ));
        assert!(matches!(
            post.u64_field("retweet_count"),
            Err(TransformError::InvalidField { .. })
        ));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            RawPost::new(json!([1, 2, 3])),
            Err(TransformError::InvalidJson(_))
        ));
        assert!(matches!(
            RawPost::from_json_str("{not json"),
            Err(TransformError::InvalidJson(_))
        ));
    }
}
