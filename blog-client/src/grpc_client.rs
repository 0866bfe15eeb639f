use std::time::Duration;
use tonic::transport::{Channel, Endpoint};

use crate::error::{BlogClientError, BlogClientResult};
use crate::models::Post;

/// Сгенерированные типы контракта `blog.ContentService`.
#[allow(missing_docs)]
pub mod pb {
    tonic::include_proto!("blog");
}

use pb::content_service_client::ContentServiceClient;

impl From<pb::Post> for Post {
    fn from(value: pb::Post) -> Self {
        Self {
            id: value.id,
            title: value.title,
            image: value.image,
            content: value.content,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
/// Параметры подключения к сервису контента.
pub struct ConnectOptions {
    /// Таймаут установки соединения.
    pub connect_timeout: Duration,
    /// Дедлайн на один запрос, `None` отключает ограничение.
    pub request_timeout: Option<Duration>,
    /// Максимум одновременных запросов по каналу, `None` отключает ограничение.
    pub concurrency_limit: Option<usize>,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Some(Duration::from_secs(10)),
            concurrency_limit: None,
        }
    }
}

#[derive(Debug, Clone)]
/// gRPC-клиент сервиса контента.
///
/// Соединение устанавливается один раз в [`ContentClient::connect`];
/// клоны клиента разделяют один канал (HTTP/2 мультиплексирование).
pub struct ContentClient {
    endpoint: String,
    inner: ContentServiceClient<Channel>,
}

impl ContentClient {
    /// Подключается к сервису контента.
    ///
    /// Адрес без схемы дополняется `http://`, адрес вида `:8000` дополняется
    /// хостом `localhost`. Ошибка подключения возвращается сразу,
    /// повторных попыток нет.
    pub async fn connect(endpoint: &str, options: &ConnectOptions) -> BlogClientResult<Self> {
        let endpoint = normalize_endpoint(endpoint);

        let mut builder = Endpoint::from_shared(endpoint.clone())
            .map_err(|err| BlogClientError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                message: err.to_string(),
            })?
            .connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(limit) = options.concurrency_limit {
            builder = builder.concurrency_limit(limit);
        }

        let channel = builder
            .connect()
            .await
            .map_err(BlogClientError::GrpcTransport)?;

        Ok(Self {
            endpoint,
            inner: ContentServiceClient::new(channel),
        })
    }

    /// Адрес сервиса, к которому подключён клиент.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Возвращает посты указанной страницы (нумерация с 1) в порядке,
    /// в котором их отдал сервис.
    pub async fn list_posts(&self, page: i32) -> BlogClientResult<Vec<Post>> {
        let mut client = self.inner.clone();
        let request = tonic::Request::new(pb::Params { page });

        let response = client
            .list_posts(request)
            .await
            .map_err(BlogClientError::from_grpc_status)?;

        Ok(response
            .into_inner()
            .posts
            .into_iter()
            .map(Post::from)
            .collect())
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    if endpoint.starts_with(':') {
        return format!("http://localhost{endpoint}");
    }
    format!("http://{endpoint}")
}
