//! User domain entity for API authentication

use chrono::{DateTime, Utc};

/// Access role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    /// Full access, including room deletion and user management
    Admin,
    /// Day-to-day front-desk operations
    Receptionist,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Receptionist => "receptionist",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "admin" => Self::Admin,
            _ => Self::Receptionist,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An API user
#[derive(Debug, Clone)]
pub struct User {
    /// UUID string
    pub id: String,
    pub username: String,
    /// bcrypt hash, never the plain password
    pub password_hash: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_roundtrip() {
        assert_eq!(UserRole::from_str("admin"), UserRole::Admin);
        assert_eq!(UserRole::from_str("receptionist"), UserRole::Receptionist);
        assert_eq!(UserRole::from_str("whatever"), UserRole::Receptionist);
    }
}
