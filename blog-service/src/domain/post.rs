use chrono::{DateTime, Utc};
use validator::Validate;

use super::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) image: Option<String>,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(
        id: i64,
        title: impl Into<String>,
        image: Option<String>,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        let title = title.into();
        validate_title(&title)?;

        Ok(Self {
            id,
            title,
            image,
            content: content.into(),
            created_at,
            updated_at,
        })
    }

    pub(crate) fn image_or_empty(&self) -> &str {
        self.image.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Validate)]
pub(crate) struct ListPostsQuery {
    #[validate(range(min = 1))]
    pub(crate) page: i32,
}

impl ListPostsQuery {
    pub(crate) fn validate_page(self) -> Result<Self, DomainError> {
        self.validate().map_err(|_| DomainError::Validation {
            field: "page",
            message: "must be >= 1",
        })?;
        Ok(self)
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Validation {
            field,
            message: "must be > 0",
        });
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() || title.chars().count() > 255 {
        return Err(DomainError::Validation {
            field: "title",
            message: "must be 1..255 chars",
        });
    }
    Ok(())
}
