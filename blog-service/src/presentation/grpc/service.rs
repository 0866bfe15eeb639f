use tonic::{Request, Response, Status};
use tracing::debug;

use crate::data::post_repository::PostRepository;
use crate::presentation::{AppState, grpc::mappers::to_proto_post_list_response};

use super::proto::{ContentService, ContentServiceServer, Params, PostListResponse};
use super::status::map_domain_error;

pub(crate) struct GrpcContentService<R: PostRepository> {
    state: AppState<R>,
}

impl<R: PostRepository + 'static> GrpcContentService<R> {
    pub(crate) fn new(state: AppState<R>) -> Self {
        Self { state }
    }

    pub(crate) fn into_server(self) -> ContentServiceServer<Self> {
        ContentServiceServer::new(self)
    }
}

#[tonic::async_trait]
impl<R: PostRepository + 'static> ContentService for GrpcContentService<R> {
    async fn list_posts(
        &self,
        request: Request<Params>,
    ) -> Result<Response<PostListResponse>, Status> {
        let params = request.into_inner();
        debug!(page = params.page, "ListPosts received");

        let posts = self
            .state
            .blog_service
            .list_posts(params.page)
            .await
            .map_err(map_domain_error)?;

        Ok(Response::new(to_proto_post_list_response(posts)))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;
    use tonic::{Code, Request};

    use super::GrpcContentService;
    use crate::application::blog_service::BlogService;
    use crate::data::post_repository::{Pagination, PostRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::Post;
    use crate::presentation::AppState;
    use crate::presentation::grpc::proto::{ContentService, Params};

    #[derive(Clone)]
    struct FakePostRepo {
        posts: Vec<Post>,
        fail_with: Option<&'static str>,
        calls: Arc<Mutex<usize>>,
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn list_posts(&self, _pagination: Pagination) -> Result<Vec<Post>, DomainError> {
            *self.calls.lock().expect("calls mutex poisoned") += 1;
            match self.fail_with {
                Some(msg) => Err(DomainError::Unavailable(msg.to_string())),
                None => Ok(self.posts.clone()),
            }
        }
    }

    fn service(repo: FakePostRepo) -> GrpcContentService<FakePostRepo> {
        let page_size = NonZeroU32::new(100).expect("page size must be > 0");
        let blog_service = Arc::new(BlogService::new(repo, page_size));
        GrpcContentService::new(AppState::new(blog_service))
    }

    fn post(id: i64, title: &str, image: Option<&str>) -> Post {
        let now = Utc::now();
        Post::new(id, title, image.map(str::to_string), "", now, now).expect("valid post")
    }

    #[tokio::test]
    async fn list_posts_returns_every_post_with_empty_image_for_null() {
        let repo = FakePostRepo {
            posts: vec![post(1, "Hello", None), post(2, "World", Some("/x.jpg"))],
            fail_with: None,
            calls: Arc::new(Mutex::new(0)),
        };

        let response = service(repo)
            .list_posts(Request::new(Params { page: 1 }))
            .await
            .expect("list_posts must succeed")
            .into_inner();

        assert_eq!(response.posts.len(), 2);
        assert_eq!(response.posts[0].title, "Hello");
        assert_eq!(response.posts[0].image, "");
        assert_eq!(response.posts[1].title, "World");
        assert_eq!(response.posts[1].image, "/x.jpg");
    }

    #[tokio::test]
    async fn list_posts_surfaces_repository_failure_as_unavailable() {
        let calls = Arc::new(Mutex::new(0));
        let repo = FakePostRepo {
            posts: vec![post(1, "Hello", None)],
            fail_with: Some("connection refused"),
            calls: Arc::clone(&calls),
        };

        let status = service(repo)
            .list_posts(Request::new(Params { page: 1 }))
            .await
            .expect_err("must fail");

        assert_eq!(status.code(), Code::Unavailable);
        assert!(status.message().contains("connection refused"));
        assert_eq!(*calls.lock().expect("calls mutex poisoned"), 1);
    }

    #[tokio::test]
    async fn list_posts_rejects_invalid_page() {
        let calls = Arc::new(Mutex::new(0));
        let repo = FakePostRepo {
            posts: Vec::new(),
            fail_with: None,
            calls: Arc::clone(&calls),
        };

        let status = service(repo)
            .list_posts(Request::new(Params { page: 0 }))
            .await
            .expect_err("page 0 must fail");

        assert_eq!(status.code(), Code::InvalidArgument);
        assert_eq!(*calls.lock().expect("calls mutex poisoned"), 0);
    }
}
