use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Whitespace-only values count as missing. Empty values are left to the
/// length rule so each field reports a single error.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        return Err(ValidationError::new("required").with_message("must not be blank".into()));
    }
    Ok(())
}

/// User entity - represents a user document stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[validate(
        length(min = 1, code = "required", message = "Path `name` is required."),
        custom(function = "not_blank")
    )]
    pub name: String,
    /// Address used for notifications
    #[validate(
        length(min = 1, code = "required", message = "Path `email` is required."),
        custom(function = "not_blank")
    )]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh time-ordered id. Not validated yet.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: Option<i32>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7().to_string(),
            name: name.into(),
            email: email.into(),
            age,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the fields present in `update` into this user
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        self.updated_at = Utc::now();
    }
}

/// Attributes accepted by `POST /user`. Presence of `name` and `email` is
/// checked by the service, not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Partial attributes accepted by `PUT /user/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
}

/// Attributes identifying a user to delete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteUser {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Store confirmation for a removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RemoveResult {
    pub deleted_count: u64,
}

/// `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
