use std::sync::Arc;

use crate::application::blog_service::BlogService;
use crate::data::post_repository::PostRepository;

pub(crate) mod grpc;

pub(crate) struct AppState<R: PostRepository> {
    pub(crate) blog_service: Arc<BlogService<R>>,
}

impl<R: PostRepository> AppState<R> {
    pub(crate) fn new(blog_service: Arc<BlogService<R>>) -> Self {
        Self { blog_service }
    }
}

impl<R: PostRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            blog_service: Arc::clone(&self.blog_service),
        }
    }
}
