use crate::domain::errors::DomainError;

const CNT_ARTICLE_STATUS_CHECK: &str = "blog_articles_status_chk";
const CNT_ARTICLE_AUTHOR_CHECK: &str = "blog_articles_author_positive_chk";

#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("Invalid status value".into())
                    }
                    CNT_ARTICLE_AUTHOR_CHECK => {
                        DomainError::Validation("Author ID must be a positive integer".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    "22001" => {
                        return DomainError::Validation("value too long for column".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        other => DomainError::Persistence(other.to_string()),
    }
}
