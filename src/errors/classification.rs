use super::types::AuditError;

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    /// The message is meant for the person filling in the form, not an operator.
    pub user_facing: bool,
    pub exit_code: i32,
}

impl AuditError {
    /// Classify this error for the presentation layers (HTTP status, exit code).
    pub fn classify(&self) -> ErrorClassification {
        match self {
            AuditError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                user_facing: false,
                exit_code: 2,
            },
            AuditError::InvalidInput(_) => ErrorClassification {
                error_type: "InvalidInputError",
                user_facing: true,
                exit_code: 3,
            },
            AuditError::InvalidLead(_) => ErrorClassification {
                error_type: "InvalidLeadError",
                user_facing: true,
                exit_code: 4,
            },
            AuditError::Io(_) => ErrorClassification {
                error_type: "IoError",
                user_facing: false,
                exit_code: 1,
            },
            AuditError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                user_facing: false,
                exit_code: 1,
            },
            AuditError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                user_facing: false,
                exit_code: 2,
            },
            AuditError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                user_facing: false,
                exit_code: 1,
            },
        }
    }
}
