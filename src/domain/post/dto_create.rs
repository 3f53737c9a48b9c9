#[derive(Debug, Clone)]
pub struct CreatePostDto {
    pub title: String,
    pub content: String,
    pub upvote: i32,
    pub downvote: i32,
}

impl CreatePostDto {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            upvote: 0,
            downvote: 0,
        }
    }

    pub fn with_votes(mut self, upvote: i32, downvote: i32) -> Self {
        self.upvote = upvote;
        self.downvote = downvote;
        self
    }
}
