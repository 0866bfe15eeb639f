pub(crate) mod pb {
    tonic::include_proto!("blog");
}

pub(crate) use pb::content_service_server::{ContentService, ContentServiceServer};
pub(crate) use pb::{Params, Post, PostListResponse};
