//! Guest domain entity

use chrono::{DateTime, Utc};

/// A registered guest.
///
/// Identity is the `(document_type, document_number)` pair; repeated
/// check-ins with the same document update the existing row.
#[derive(Debug, Clone)]
pub struct Guest {
    pub id: i32,
    /// Identity document kind: "dni", "passport", "ce", ...
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
    /// Marked manually by reception for returning guests
    pub frequent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// "Name Surname" for confirmation messages and cleaning-order notes
    pub fn full_name(&self) -> String {
        match &self.surname {
            Some(surname) => format!("{} {}", self.name, surname),
            None => self.name.clone(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_surname() {
        let guest = Guest {
            id: 1,
            document_type: "dni".into(),
            document_number: "12345678".into(),
            name: "Ana".into(),
            surname: Some("Pérez".into()),
            phone: None,
            email: None,
            nationality: Some("PE".into()),
            frequent: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(guest.full_name(), "Ana Pérez");
    }

    #[test]
    fn full_name_without_surname() {
        let guest = Guest {
            id: 2,
            document_type: "passport".into(),
            document_number: "X99".into(),
            name: "Ana".into(),
            surname: None,
            phone: None,
            email: None,
            nationality: None,
            frequent: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(guest.full_name(), "Ana");
    }
}
