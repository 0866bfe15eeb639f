use thiserror::Error;
use tonic::Code;

#[derive(Debug, Error)]
/// Ошибки клиентской библиотеки `blog-client`.
pub enum BlogClientError {
    /// Адрес сервиса не удалось разобрать как URI.
    #[error("invalid grpc endpoint '{endpoint}': {message}")]
    InvalidEndpoint {
        /// Исходный адрес.
        endpoint: String,
        /// Причина ошибки.
        message: String,
    },

    /// Ошибка подключения/канала gRPC (`tonic::transport::Error`).
    #[error("grpc transport error: {0}")]
    GrpcTransport(#[from] tonic::transport::Error),

    /// Сервис ответил ошибкой (`tonic::Status`).
    #[error("rpc error: code = {code:?} desc = {message}")]
    Rpc {
        /// gRPC-код ответа.
        code: Code,
        /// Текст ошибки, как его передал сервис.
        message: String,
    },
}

/// Результат операций `blog-client`.
pub type BlogClientResult<T> = Result<T, BlogClientError>;

impl BlogClientError {
    pub(crate) fn from_grpc_status(status: tonic::Status) -> Self {
        Self::Rpc {
            code: status.code(),
            message: status.message().to_string(),
        }
    }

    /// gRPC-код ошибки; для ошибок транспорта это `Code::Unavailable`.
    pub fn code(&self) -> Code {
        match self {
            Self::InvalidEndpoint { .. } => Code::InvalidArgument,
            Self::GrpcTransport(_) => Code::Unavailable,
            Self::Rpc { code, .. } => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use tonic::Code;

    use super::BlogClientError;

    #[test]
    fn grpc_status_keeps_code_and_message() {
        let err = BlogClientError::from_grpc_status(tonic::Status::new(
            Code::Unavailable,
            "storage unavailable: pool timed out",
        ));

        assert_eq!(err.code(), Code::Unavailable);
        match &err {
            BlogClientError::Rpc { message, .. } => {
                assert_eq!(message, "storage unavailable: pool timed out")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rpc_error_display_contains_code_and_description() {
        let err = BlogClientError::from_grpc_status(tonic::Status::new(
            Code::Internal,
            "internal error: relation \"posts\" does not exist",
        ));

        assert_eq!(
            err.to_string(),
            "rpc error: code = Internal desc = internal error: relation \"posts\" does not exist"
        );
    }
}
