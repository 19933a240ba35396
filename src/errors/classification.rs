use super::types::OpenQuestError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// Process exit code used by the CLI.
    pub exit_code: i32,
    /// HTTP status code used by the API.
    pub status: u16,
}

impl OpenQuestError {
    /// Classify this error for the CLI exit code and the API status.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            OpenQuestError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
                status: 400,
            },
            OpenQuestError::InvalidInput(_) => ErrorClassification {
                error_type: "InvalidInputError",
                exit_code: 5,
                status: 400,
            },
            OpenQuestError::NotFound(_) => ErrorClassification {
                error_type: "NotFoundError",
                exit_code: 4,
                status: 404,
            },
            OpenQuestError::ForkTooSimilar(_) => ErrorClassification {
                error_type: "ForkTooSimilarError",
                exit_code: 6,
                status: 422,
            },
            OpenQuestError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                exit_code: 5,
                status: 400,
            },
            OpenQuestError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                exit_code: 5,
                status: 400,
            },
            OpenQuestError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 3,
                status: 500,
            },
            OpenQuestError::Database(_) => ErrorClassification {
                error_type: "DatabaseError",
                exit_code: 3,
                status: 500,
            },
            OpenQuestError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
                status: 500,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        let err = OpenQuestError::Config("weights do not sum to 100".into());
        let class = err.classify();
        assert_eq!(class.error_type, "ConfigError");
        assert_eq!(class.exit_code, 2);
        assert_eq!(class.status, 400);
    }

    #[test]
    fn test_invalid_input_is_bad_request() {
        let err = OpenQuestError::InvalidInput("bad key".into());
        assert_eq!(err.classify().status, 400);
    }

    #[test]
    fn test_not_found_is_404() {
        let err = OpenQuestError::NotFound("draft".into());
        assert_eq!(err.classify().status, 404);
    }

    #[test]
    fn test_fork_too_similar_exit_code() {
        let err = OpenQuestError::ForkTooSimilar(2);
        let class = err.classify();
        assert_eq!(class.exit_code, 6);
        assert_eq!(class.error_type, "ForkTooSimilarError");
    }

    #[test]
    fn test_database_is_server_error() {
        let err = OpenQuestError::Database("locked".into());
        assert_eq!(err.classify().status, 500);
    }

    #[test]
    fn test_json_error_is_bad_request() {
        let err: OpenQuestError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.classify().error_type, "JsonError");
        assert_eq!(err.classify().status, 400);
    }
}
