use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role, which determines the feature set the dashboard exposes.
///
/// Creators administer the platform itself and belong to no barbershop;
/// admins run exactly one barbershop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Creator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across all users, compared case-insensitively.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barbershop_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_form() {
        assert_eq!(serde_json::to_value(UserRole::Admin).unwrap(), "admin");
        assert_eq!(serde_json::to_value(UserRole::Creator).unwrap(), "creator");
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let user = User {
            id: "admin-1".to_string(),
            name: "João Silva".to_string(),
            email: "admin@barbeariaelegante.com".to_string(),
            phone: None,
            role: UserRole::Admin,
            barbershop_id: Some("barbershop-1".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["barbershopId"], "barbershop-1");
        assert!(value.get("phone").is_none());
        assert!(value["createdAt"].is_string());
    }
}
