//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Storage-assigned identifier
    pub id: i32,
    /// Display name (unique)
    #[cfg_attr(feature = "openapi", schema(example = "Frodo Baggins"))]
    pub name: String,
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Frodo Baggins"))]
    pub name: String,
}

/// User update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateUser {
    /// New display name
    pub name: Option<String>,
}

impl UpdateUser {
    /// True when the patch would not change any column
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// Filter accepted by `GET /api/users`.
///
/// Interpretation is left to the store; unknown query parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct UserFilter {
    /// Only return the user with exactly this name
    pub name: Option<String>,
}

/// A post as listed under its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserPost {
    pub id: i32,
    pub text: String,
    /// Name of the user who wrote the post
    #[serde(rename = "postedBy")]
    pub posted_by: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_post_uses_posted_by_key() {
        let post = UserPost {
            id: 3,
            text: "Second breakfast".to_string(),
            posted_by: "Pippin".to_string(),
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value, json!({ "id": 3, "text": "Second breakfast", "postedBy": "Pippin" }));
    }

    #[test]
    fn create_user_ignores_extra_attributes() {
        let dto: CreateUser =
            serde_json::from_value(json!({ "name": "Sam", "bio": "gardener" })).unwrap();
        assert_eq!(dto.name, "Sam");
    }

    #[test]
    fn update_user_emptiness() {
        assert!(UpdateUser::default().is_empty());
        let patch: UpdateUser = serde_json::from_value(json!({ "name": "Rosie" })).unwrap();
        assert!(!patch.is_empty());
    }
}
