use thiserror::Error;

/// Errors that can occur while constructing, reading or writing IOF data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IofError {
    /// One or more construction-time invariants failed.
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<ValidationError>),

    /// A token outside a closed vocabulary (e.g. an unknown contact type).
    #[error("'{value}' is not a valid {vocabulary} token")]
    InvalidToken {
        vocabulary: &'static str,
        value: String,
    },

    /// Malformed XML or a failure inside the XML writer.
    #[error("XML error: {0}")]
    Xml(String),

    /// The document root is not the requested list type.
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },

    /// The document root is not in the IOF 3.0 namespace.
    #[error("root element is not in the IOF namespace (found {})", .found.as_deref().unwrap_or("no namespace"))]
    Namespace { found: Option<String> },

    /// A required child element is absent.
    #[error("{path}: missing required element <{name}>")]
    MissingElement { path: String, name: String },

    /// A required attribute is absent.
    #[error("{path}: missing required attribute '{name}'")]
    MissingAttribute { path: String, name: String },

    /// An element or attribute value could not be converted.
    #[error("{path}: invalid value '{value}', expected {expected}")]
    InvalidValue {
        path: String,
        value: String,
        expected: &'static str,
    },

    /// Input exceeded a configured reader limit.
    #[error("limit exceeded: {0}")]
    Limit(String),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_violations(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl IofError {
    /// The violated rule ids, if this is a validation failure.
    pub fn rule_ids(&self) -> Vec<&str> {
        match self {
            Self::Validation(errors) => errors.iter().filter_map(|e| e.rule.as_deref()).collect(),
            _ => Vec::new(),
        }
    }

    /// Prefix every violation's field with the element path it was found at.
    pub(crate) fn at_path(self, path: &str) -> Self {
        match self {
            Self::Validation(errors) => Self::Validation(
                errors
                    .into_iter()
                    .map(|e| ValidationError {
                        field: format!("{path}.{}", e.field),
                        ..e
                    })
                    .collect(),
            ),
            other => other,
        }
    }
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "taxable_amount").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
    /// Rule ID if applicable (e.g. "FEE-1").
    pub rule: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(rule) = &self.rule {
            write!(f, "[{}] {}: {}", rule, self.field, self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl ValidationError {
    /// Create a validation error without a rule ID.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Create a validation error with a rule ID.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }
}
