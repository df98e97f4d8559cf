//! Guest DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::guest::Guest;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GuestDto {
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub name: String,
    pub surname: Option<String>,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub nationality: Option<String>,
    pub frequent: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Guest> for GuestDto {
    fn from(g: Guest) -> Self {
        let full_name = g.full_name();
        Self {
            id: g.id,
            document_type: g.document_type,
            document_number: g.document_number,
            name: g.name,
            surname: g.surname,
            full_name,
            phone: g.phone,
            email: g.email,
            nationality: g.nationality,
            frequent: g.frequent,
            created_at: g.created_at,
            updated_at: g.updated_at,
        }
    }
}

/// Guest registration as captured at the front desk.
///
/// Posting the same document twice refreshes the existing record.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertGuestRequest {
    /// Identity document kind: "dni", "passport", "ce"
    #[validate(length(min = 1, max = 20))]
    pub document_type: String,
    #[validate(length(min = 1, max = 30))]
    pub document_number: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub surname: Option<String>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub nationality: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetFrequentRequest {
    pub frequent: bool,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListGuestsQuery {
    /// Substring to match against name, surname and document number
    pub q: Option<String>,
    /// Page number (1-based). Default: 1
    pub page: Option<u32>,
    /// Page size (1-100). Default: 50
    pub limit: Option<u32>,
}
