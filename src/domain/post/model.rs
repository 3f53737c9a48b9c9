//! Post domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub upvote: i32,
    pub downvote: i32,
    pub created_at: DateTime<Utc>,
}

impl Post {
    pub fn score(&self) -> i32 {
        self.upvote - self.downvote
    }
}

/// Ordering applied before a post listing is paged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostSort {
    /// Ascending id (insertion order)
    #[default]
    Id,
    Title,
    /// Most upvoted first
    Upvote,
    /// Most downvoted first
    Downvote,
    /// Most recent first
    Newest,
}

impl PostSort {
    /// Parse a `sort_by` query value; unknown values fall back to [`PostSort::Id`].
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("title") => Self::Title,
            Some("upvote") => Self::Upvote,
            Some("downvote") => Self::Downvote,
            Some("newest") => Self::Newest,
            _ => Self::Id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parse() {
        assert_eq!(PostSort::parse(Some("upvote")), PostSort::Upvote);
        assert_eq!(PostSort::parse(Some("newest")), PostSort::Newest);
        assert_eq!(PostSort::parse(Some("bogus")), PostSort::Id);
        assert_eq!(PostSort::parse(None), PostSort::Id);
    }

    #[test]
    fn test_score() {
        let post = Post {
            id: 1,
            title: "Title 1".to_string(),
            content: "Content 1".to_string(),
            upvote: 5,
            downvote: 1,
            created_at: Utc::now(),
        };
        assert_eq!(post.score(), 4);
    }
}
