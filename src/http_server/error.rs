use axum::{
    body::Body,
    extract::rejection::JsonRejection,
    http::{Response, StatusCode},
    response::IntoResponse,
};

use crate::error::ServiceError;

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::ConstraintViolation(_) => StatusCode::CONFLICT,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::Validation(rejection.body_text())
    }
}

// Tell axum how to convert `ServiceError` into a response.
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response<Body> {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{self:?}");
            return (status, "Something went wrong".to_string()).into_response();
        }

        log::debug!("Request failed with {status}: {self}");
        (status, self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ServiceError::not_found("Artist", 1).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServiceError::Validation("missing field".into())
                .into_response()
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::ConstraintViolation("fk".into())
                .into_response()
                .status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::Forbidden("no".into()).into_response().status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ServiceError::Database(DbErr::Custom("boom".into()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
