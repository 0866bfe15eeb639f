use std::fmt;

use axum::extract::State;
use blog_client::Post;

use crate::presentation::AppState;
use crate::presentation::app_error::AppResult;

/// The gateway never forwards paging from the request.
const FIRST_PAGE: i32 = 1;

pub(crate) async fn list_posts(State(state): State<AppState>) -> AppResult<String> {
    let posts = state.posts.list_posts(FIRST_PAGE).await?;
    Ok(PostList(&posts).to_string())
}

pub(crate) async fn health(State(state): State<AppState>) -> AppResult<&'static str> {
    state.posts.list_posts(FIRST_PAGE).await?;
    Ok("Ok")
}

struct PostList<'a>(&'a [Post]);

impl fmt::Display for PostList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Posts: {}", self.0.len())?;
        for post in self.0 {
            writeln!(f, "- id: {}", post.id)?;
            writeln!(f, "  title: {}", post.title)?;
            writeln!(f, "  image: {}", post.image)?;
            writeln!(f, "  content: {}", post.content)?;
            writeln!(f, "  created_at: {}", post.created_at)?;
            writeln!(f, "  updated_at: {}", post.updated_at)?;
        }
        Ok(())
    }
}
