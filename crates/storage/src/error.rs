use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error(
        "Results already exist for competition {competition_id} from judge {judge_id}. Use PUT to update."
    )]
    Conflict { competition_id: i32, judge_id: i32 },

    #[error(
        "No results found for competition {competition_id} from judge {judge_id}. Use POST to create new results."
    )]
    NotFound { competition_id: i32, judge_id: i32 },
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl From<ValidationErrors> for StorageError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages = Vec::new();
        collect_messages(&errors, None, &mut messages);
        Self::InvalidArgument(messages.join("; "))
    }
}

/// Flatten nested validation errors into `path: message` entries.
///
/// Fields are visited in name order, which keeps `competition_id`,
/// `judge_id` and `results` in the order the rules are checked.
fn collect_messages(errors: &ValidationErrors, prefix: Option<&str>, out: &mut Vec<String>) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by_key(|(field, _)| field.to_string());

    for (field, kind) in entries {
        let field = field.to_string();
        // Struct-level errors are reported under "__all__"
        let path = match (prefix, field.as_str()) {
            (Some(prefix), "__all__") => prefix.to_string(),
            (None, "__all__") => String::new(),
            (Some(prefix), field) => format!("{}.{}", prefix, field),
            (None, field) => field.to_string(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| error.code.to_string());

                    if path.is_empty() {
                        out.push(message);
                    } else {
                        out.push(format!("{}: {}", path, message));
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, Some(&path), out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(nested, Some(&format!("{}[{}]", path, index)), out);
                }
            }
        }
    }
}

impl StorageError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StorageError::InvalidArgument(_))
    }
}
