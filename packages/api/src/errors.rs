use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("session is not authorized ({0})")]
    Unauthorized(StatusCode),

    #[error("backend responded with {0}")]
    Status(StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl ApiError {
    /// The backend no longer accepts the session; the user must sign in again.
    pub fn requires_logout(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}

/// Map a response status onto the error taxonomy.
pub fn check_status(status: StatusCode) -> Result<(), ApiError> {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ApiError::Unauthorized(status)),
        s if s.is_success() => Ok(()),
        s => Err(ApiError::Status(s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_require_logout() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let err = check_status(status).unwrap_err();
            assert!(err.requires_logout());
        }
    }

    #[test]
    fn test_other_failures_do_not_log_out() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            let err = check_status(status).unwrap_err();
            assert!(!err.requires_logout());
            assert!(matches!(err, ApiError::Status(s) if s == status));
        }
    }

    #[test]
    fn test_success_statuses() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(check_status(StatusCode::NO_CONTENT).is_ok());
    }
}
