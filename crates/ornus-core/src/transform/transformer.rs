use crate::domain::{NormalizedRecord, RawPost, UserInfo};
use crate::error::{TransformError, TransformResult};
use crate::ports::{SentimentError, SentimentScorer};

use super::{date, stats};

/// What to report for a post whose text contains no sentences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyTextPolicy {
    /// Fail with [`TransformError::EmptyText`].
    #[default]
    Fail,
    /// Score the post as neutral (`0.0`).
    Neutral,
}

/// Record transformer - reads one raw post and assembles its normalized record.
///
/// Every accessor reads from the held post and never mutates it, so the same
/// transformer can be queried any number of times.
pub struct RecordTransformer<'a, S: ?Sized> {
    post: &'a RawPost,
    label: &'a str,
    scorer: &'a S,
    empty_text: EmptyTextPolicy,
}

impl<'a, S: SentimentScorer + ?Sized> RecordTransformer<'a, S> {
    pub fn new(post: &'a RawPost, label: &'a str, scorer: &'a S) -> Self {
        Self {
            post,
            label,
            scorer,
            empty_text: EmptyTextPolicy::default(),
        }
    }

    pub fn with_empty_text_policy(mut self, policy: EmptyTextPolicy) -> Self {
        self.empty_text = policy;
        self
    }

    pub fn label(&self) -> &str {
        self.label
    }

    pub fn id(&self) -> TransformResult<u64> {
        self.post.u64_field("id")
    }

    pub fn text(&self) -> TransformResult<&'a str> {
        self.post.str_field("text")
    }

    /// Hashtag strings in source order.
    pub fn hashtags(&self) -> TransformResult<Vec<String>> {
        self.post
            .array_field("entities.hashtags")?
            .iter()
            .enumerate()
            .map(|(index, tag)| {
                let path = format!("entities.hashtags.{}.text", index);
                match tag.as_object().and_then(|obj| obj.get("text")) {
                    Some(text) => text
                        .as_str()
                        .map(str::to_string)
                        .ok_or_else(|| TransformError::invalid(path, "a string")),
                    None => Err(TransformError::missing(path)),
                }
            })
            .collect()
    }

    /// Posting date as `YYYY-M-D`.
    pub fn date(&self) -> TransformResult<String> {
        date::format_default(self.post.str_field("created_at")?)
    }

    pub fn retweets(&self) -> TransformResult<u64> {
        self.post.u64_field("retweet_count")
    }

    pub fn user_info(&self) -> TransformResult<UserInfo> {
        Ok(UserInfo {
            date_created: date::format_default(self.post.str_field("user.created_at")?)?,
            id: self.post.u64_field("user.id")?,
            followers: self.post.u64_field("user.followers_count")?,
            friends: self.post.u64_field("user.friends_count")?,
        })
    }

    /// Mean of the per-sentence polarities of the post text.
    pub fn sentiment(&self) -> TransformResult<f64> {
        let scores = self.scorer.score(self.text()?)?;

        if let Some(bad) = scores
            .iter()
            .copied()
            .find(|s| !s.is_finite() || !(-1.0..=1.0).contains(s))
        {
            return Err(SentimentError::PolarityOutOfRange(bad).into());
        }

        match stats::average(&scores) {
            Some(mean) => Ok(mean),
            None => match self.empty_text {
                EmptyTextPolicy::Fail => Err(TransformError::EmptyText),
                EmptyTextPolicy::Neutral => Ok(0.0),
            },
        }
    }

    /// Assemble the full record, failing on the first field that cannot be read.
    pub fn build(&self) -> TransformResult<NormalizedRecord> {
        Ok(NormalizedRecord {
            id: self.id()?,
            text: self.text()?.to_string(),
            hashtags: self.hashtags()?,
            date: self.date()?,
            retweets: self.retweets()?,
            user: self.user_info()?,
            label: self.label.to_string(),
            sentiment: self.sentiment()?,
        })
    }
}

/// Transform a batch of posts under one label.
///
/// Results come back in input order; a failing post does not affect the others.
pub fn transform_all<'p, S, I>(
    posts: I,
    label: &str,
    scorer: &S,
    policy: EmptyTextPolicy,
) -> Vec<TransformResult<NormalizedRecord>>
where
    S: SentimentScorer + ?Sized,
    I: IntoIterator<Item = &'p RawPost>,
{
    posts
        .into_iter()
        .map(|post| {
            RecordTransformer::new(post, label, scorer)
                .with_empty_text_policy(policy)
                .build()
        })
        .collect()
}
