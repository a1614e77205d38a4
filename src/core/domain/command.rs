use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Entity already exists: {entity_type} - {details}")]
    AlreadyExists {
        entity_type: String,
        details: String,
    },

    #[error("Entity not found: {entity_type} - {details}")]
    NotFound {
        entity_type: String,
        details: String,
    },
}

impl CommandError {
    pub fn account_not_found(id: i32) -> Self {
        CommandError::NotFound {
            entity_type: "Account".to_string(),
            details: format!("id: {}", id),
        }
    }

    pub fn account_already_exists(id: i32) -> Self {
        CommandError::AlreadyExists {
            entity_type: "Account".to_string(),
            details: format!("id: {}", id),
        }
    }

    pub fn account_name_taken(name: &str) -> Self {
        CommandError::AlreadyExists {
            entity_type: "Account".to_string(),
            details: format!("name: {}", name),
        }
    }
}
