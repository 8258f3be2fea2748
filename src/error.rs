use sea_orm::{DbErr, SqlErr};

/// Failures surfaced by the storage and service layers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Forbidden: {0}")]
    Forbidden(String),
    #[error("Database error: {0}")]
    Database(DbErr),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<DbErr> for ServiceError {
    fn from(err: DbErr) -> Self {
        let message = match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Some(UNIQUE_MESSAGE.to_string()),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                Some(FOREIGN_KEY_MESSAGE.to_string())
            }
            // CHECK and NOT NULL failures are not classified by sea-orm
            _ => constraint_message(&err.to_string()),
        };

        match message {
            Some(message) => {
                log::debug!("Constraint violation: {err}");
                Self::ConstraintViolation(message)
            }
            None => Self::Database(err),
        }
    }
}

const UNIQUE_MESSAGE: &str = "value already exists";
const FOREIGN_KEY_MESSAGE: &str = "referenced record does not exist";

/// Short client-facing description of an SQLite constraint failure, or `None`
/// when `raw` is not one.
fn constraint_message(raw: &str) -> Option<String> {
    let (kind, detail) = raw.split_once(" constraint failed")?;
    let detail = detail.trim_start_matches(':').trim();

    let message = if kind.ends_with("FOREIGN KEY") {
        FOREIGN_KEY_MESSAGE.to_string()
    } else if kind.ends_with("UNIQUE") {
        UNIQUE_MESSAGE.to_string()
    } else if kind.ends_with("CHECK") {
        match detail
            .strip_prefix("length(")
            .and_then(|rest| rest.split_once(')'))
        {
            Some((column, _)) => format!("`{column}` is too long"),
            None => "value out of range".to_string(),
        }
    } else if kind.ends_with("NOT NULL") {
        match detail.rsplit_once('.') {
            Some((_, column)) => format!("`{column}` is required"),
            None => "required value missing".to_string(),
        }
    } else {
        "constraint failed".to_string()
    };

    Some(message)
}

/// Unwraps a required string field, rejecting missing or blank values.
pub fn required<T>(field: &str, value: Option<T>) -> ServiceResult<T>
where
    T: AsRef<str>,
{
    match value {
        Some(value) if !value.as_ref().trim().is_empty() => Ok(value),
        Some(_) => Err(ServiceError::Validation(format!("`{field}` must not be empty"))),
        None => Err(ServiceError::Validation(format!("missing field `{field}`"))),
    }
}

/// Like [`required`] for non-string fields.
pub fn present<T>(field: &str, value: Option<T>) -> ServiceResult<T> {
    value.ok_or_else(|| ServiceError::Validation(format!("missing field `{field}`")))
}
