#[derive(Debug, Clone, Default)]
pub struct GetPostsDto {
    /// Substring matched against title or content
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
