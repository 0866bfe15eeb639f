use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::post::Post as DomainPost;

use super::proto::{Post, PostListResponse};

pub(crate) fn to_proto_post(post: DomainPost) -> Post {
    let image = post.image_or_empty().to_string();
    Post {
        id: post.id,
        title: post.title,
        image,
        content: post.content,
        created_at: to_proto_timestamp(post.created_at),
        updated_at: to_proto_timestamp(post.updated_at),
    }
}

pub(crate) fn to_proto_post_list_response(posts: Vec<DomainPost>) -> PostListResponse {
    PostListResponse {
        posts: posts.into_iter().map(to_proto_post).collect(),
    }
}

fn to_proto_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
