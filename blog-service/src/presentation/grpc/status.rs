use tonic::Status;

use crate::domain::error::DomainError;

pub(crate) fn map_domain_error(err: DomainError) -> Status {
    match err {
        DomainError::Validation { .. } => Status::invalid_argument(err.to_string()),
        DomainError::Unavailable(_) => Status::unavailable(err.to_string()),
        DomainError::Internal(_) => Status::internal(err.to_string()),
    }
}
