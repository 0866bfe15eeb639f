use std::num::NonZeroU32;

use tracing::{info, warn};

use crate::data::post_repository::{Pagination, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{ListPostsQuery, Post};

pub(crate) struct BlogService<R: PostRepository> {
    repo: R,
    page_size: NonZeroU32,
}

impl<R: PostRepository> BlogService<R> {
    pub(crate) fn new(repo: R, page_size: NonZeroU32) -> Self {
        Self { repo, page_size }
    }

    pub(crate) async fn list_posts(&self, page: i32) -> Result<Vec<Post>, DomainError> {
        let query = ListPostsQuery { page }.validate_page()?;
        let pagination = Pagination {
            page: query.page.unsigned_abs(),
            page_size: self.page_size.get(),
        };

        match self.repo.list_posts(pagination).await {
            Ok(posts) => {
                info!(page, count = posts.len(), "listed posts");
                Ok(posts)
            }
            Err(err) => {
                warn!(page, error = %err, "failed to list posts");
                Err(err)
            }
        }
    }
}
