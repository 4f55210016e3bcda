use serde::{Deserialize, Serialize};

/// Normalized record - the flat, storage-ready shape of a post.
///
/// Serialized key names are consumed downstream and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub id: u64,
    pub text: String,
    pub hashtags: Vec<String>,
    /// Posting date as `YYYY-M-D`.
    pub date: String,
    pub retweets: u64,
    pub user: UserInfo,
    pub label: String,
    /// Mean sentence polarity in `[-1, 1]`.
    pub sentiment: f64,
}

/// Author details carried on a normalized record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "dateCreated")]
    pub date_created: String,
    pub id: u64,
    pub followers: u64,
    pub friends: u64,
}
