use std::sync::Arc;

use async_trait::async_trait;
use blog_client::{BlogClientResult, ContentClient, Post};

pub(crate) mod app_error;
pub(crate) mod handlers;

/// Backend the gateway reads posts from.
#[async_trait]
pub(crate) trait PostSource: Send + Sync {
    async fn list_posts(&self, page: i32) -> BlogClientResult<Vec<Post>>;
}

#[async_trait]
impl PostSource for ContentClient {
    async fn list_posts(&self, page: i32) -> BlogClientResult<Vec<Post>> {
        ContentClient::list_posts(self, page).await
    }
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) posts: Arc<dyn PostSource>,
}

impl AppState {
    pub(crate) fn new(posts: Arc<dyn PostSource>) -> Self {
        Self { posts }
    }
}
