use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Transport(String),
    NotFound(String),
    Validation(String),
    OperationFailed(String),
    InvalidResponse(String),
    ConfigError(String),
}

impl AppError {
    /// Text shown to the user when a view reports this error.
    pub fn notice_text(&self) -> String {
        match self {
            AppError::Transport(_) => "Cannot reach the server".to_string(),
            AppError::NotFound(_) => "Product not found".to_string(),
            AppError::Validation(msg) => msg.clone(),
            AppError::OperationFailed(_) => "Operation failed".to_string(),
            AppError::InvalidResponse(_) => "Unexpected response from the server".to_string(),
            AppError::ConfigError(msg) => format!("Configuration error: {}", msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::OperationFailed(msg) => write!(f, "Operation failed: {}", msg),
            AppError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::InvalidResponse(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_notice_is_the_backend_message() {
        let err = AppError::Validation("name should not be empty".to_string());
        assert_eq!(err.notice_text(), "name should not be empty");
    }

    #[test]
    fn transport_notice_hides_details() {
        let err = AppError::Transport("connection refused (os error 111)".to_string());
        assert_eq!(err.notice_text(), "Cannot reach the server");
        assert!(err.to_string().contains("connection refused"));
    }
}
