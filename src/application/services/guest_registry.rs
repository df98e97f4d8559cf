//! Guest registry: idempotent upsert keyed on the identity document

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::guest::Guest;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// Input for a guest upsert. Mirrors the fields reception captures at the
/// front desk; everything beyond document and name is optional.
#[derive(Debug, Clone)]
pub struct UpsertGuest {
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
}

/// Resolves a guest identity by document, creating or refreshing the record.
///
/// Guests are permanent once created; there is no delete operation.
pub struct GuestRegistry {
    repos: Arc<dyn RepositoryProvider>,
}

impl GuestRegistry {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Look up by `(document_type, document_number)`. When found, refresh the
    /// mutable fields and return the existing row; otherwise insert a new one.
    pub async fn upsert_guest(&self, input: UpsertGuest) -> DomainResult<Guest> {
        if input.document_number.trim().is_empty() {
            return Err(DomainError::Validation(
                "document_number is required".to_string(),
            ));
        }
        if input.name.trim().is_empty() {
            return Err(DomainError::Validation("guest name is required".to_string()));
        }

        let existing = self
            .repos
            .guests()
            .find_by_document(&input.document_type, &input.document_number)
            .await?;

        match existing {
            Some(mut guest) => {
                // Name is kept current; contact fields are overwritten when
                // the new registration supplies them.
                guest.name = input.name;
                guest.surname = input.surname.or(guest.surname);
                guest.phone = input.phone.or(guest.phone);
                guest.email = input.email.or(guest.email);
                guest.nationality = input.nationality.or(guest.nationality);
                guest.updated_at = Utc::now();
                self.repos.guests().update(guest.clone()).await?;
                info!(guest_id = guest.id, document = %guest.document_number, "Guest refreshed");
                Ok(guest)
            }
            None => {
                let now = Utc::now();
                let guest = Guest {
                    id: 0,
                    document_type: input.document_type,
                    document_number: input.document_number,
                    name: input.name,
                    surname: input.surname,
                    phone: input.phone,
                    email: input.email,
                    nationality: input.nationality,
                    frequent: false,
                    created_at: now,
                    updated_at: now,
                };
                let guest = self.repos.guests().insert(guest).await?;
                info!(guest_id = guest.id, document = %guest.document_number, "Guest registered");
                Ok(guest)
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn registry() -> GuestRegistry {
        GuestRegistry::new(Arc::new(InMemoryRepositoryProvider::new()))
    }

    fn ana() -> UpsertGuest {
        UpsertGuest {
            document_type: "dni".into(),
            document_number: "12345678".into(),
            name: "Ana".into(),
            surname: Some("Pérez".into()),
            phone: Some("999111222".into()),
            email: None,
            nationality: Some("PE".into()),
        }
    }

    #[tokio::test]
    async fn upsert_creates_then_updates_one_row() {
        let registry = registry();

        let first = registry.upsert_guest(ana()).await.unwrap();
        assert!(first.id > 0);

        let mut second_input = ana();
        second_input.phone = Some("888000111".into());
        let second = registry.upsert_guest(second_input).await.unwrap();

        // Same row, latest contact info.
        assert_eq!(second.id, first.id);
        assert_eq!(second.phone.as_deref(), Some("888000111"));

        let all = registry.repos.guests().find_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn upsert_keeps_old_contact_when_not_supplied() {
        let registry = registry();
        registry.upsert_guest(ana()).await.unwrap();

        let mut followup = ana();
        followup.phone = None;
        let guest = registry.upsert_guest(followup).await.unwrap();
        assert_eq!(guest.phone.as_deref(), Some("999111222"));
    }

    #[tokio::test]
    async fn missing_document_number_is_rejected() {
        let registry = registry();
        let mut input = ana();
        input.document_number = "  ".into();
        let err = registry.upsert_guest(input).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn missing_name_is_rejected() {
        let registry = registry();
        let mut input = ana();
        input.name = "".into();
        let err = registry.upsert_guest(input).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
