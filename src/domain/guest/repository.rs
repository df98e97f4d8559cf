//! Guest repository interface

use async_trait::async_trait;

use super::model::Guest;
use crate::domain::DomainResult;

#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Insert a new guest; the store assigns the id.
    /// Fails with `Conflict` when the (document_type, document_number)
    /// uniqueness constraint is violated.
    async fn insert(&self, guest: Guest) -> DomainResult<Guest>;

    /// Find a guest by ID
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Guest>>;

    /// Find a guest by identity document
    async fn find_by_document(
        &self,
        document_type: &str,
        document_number: &str,
    ) -> DomainResult<Option<Guest>>;

    /// All guests, newest first
    async fn find_all(&self) -> DomainResult<Vec<Guest>>;

    /// Guests whose name, surname or document number contains `query`
    async fn search(&self, query: &str) -> DomainResult<Vec<Guest>>;

    /// Update an existing guest
    async fn update(&self, guest: Guest) -> DomainResult<()>;
}
