//! Клиентская библиотека для работы с blog-service по gRPC.
//!
//! Предоставляет `ContentClient`: одно долгоживущее соединение с сервисом
//! контента, которое устанавливается при старте процесса и затем
//! переиспользуется всеми запросами (канал `tonic` безопасно клонируется).
#![warn(missing_docs)]

mod error;
mod grpc_client;
mod models;

pub use error::{BlogClientError, BlogClientResult};
pub use grpc_client::{ConnectOptions, ContentClient, pb};
pub use models::Post;
