//! User repository interface

use async_trait::async_trait;

use super::model::User;
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Conflict` on duplicate username.
    async fn insert(&self, user: User) -> DomainResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    /// All users
    async fn find_all(&self) -> DomainResult<Vec<User>>;

    /// Update an existing user
    async fn update(&self, user: User) -> DomainResult<()>;
}
