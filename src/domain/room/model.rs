//! Room domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Room category, drives capacity defaults and rate lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    Simple,
    Double,
    Matrimonial,
    Suite,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Double => "double",
            Self::Matrimonial => "matrimonial",
            Self::Suite => "suite",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "simple" => Some(Self::Simple),
            "double" => Some(Self::Double),
            "matrimonial" => Some(Self::Matrimonial),
            "suite" => Some(Self::Suite),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse room status, the source of truth for front-desk availability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
    Cleaning,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Cleaning => "cleaning",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "occupied" => Self::Occupied,
            "cleaning" => Self::Cleaning,
            "maintenance" => Self::Maintenance,
            _ => Self::Available,
        }
    }
}

impl std::fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A physical room
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i32,
    /// Human-facing room number, unique across the property
    pub number: String,
    pub room_type: RoomType,
    pub capacity: i32,
    pub floor: i32,
    pub status: RoomStatus,
    /// Standard nightly price before season/weekend adjustments
    pub base_price: Decimal,
    pub notes: Option<String>,
    /// Soft-delete flag; inactive rooms never appear in availability
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Whether a guest can be checked into this room right now.
    ///
    /// A room under cleaning still accepts check-ins (rushed turnover);
    /// occupied and maintenance rooms do not.
    pub fn accepts_checkin(&self) -> bool {
        self.active
            && matches!(self.status, RoomStatus::Available | RoomStatus::Cleaning)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_room(status: RoomStatus) -> Room {
        Room {
            id: 1,
            number: "101".to_string(),
            room_type: RoomType::Double,
            capacity: 2,
            floor: 1,
            status,
            base_price: Decimal::new(8000, 2),
            notes: None,
            active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn available_room_accepts_checkin() {
        assert!(sample_room(RoomStatus::Available).accepts_checkin());
    }

    #[test]
    fn cleaning_room_accepts_checkin() {
        // Rushed turnover: the front desk may check a guest into a room
        // housekeeping has not yet released.
        assert!(sample_room(RoomStatus::Cleaning).accepts_checkin());
    }

    #[test]
    fn occupied_and_maintenance_reject_checkin() {
        assert!(!sample_room(RoomStatus::Occupied).accepts_checkin());
        assert!(!sample_room(RoomStatus::Maintenance).accepts_checkin());
    }

    #[test]
    fn inactive_room_rejects_checkin() {
        let mut room = sample_room(RoomStatus::Available);
        room.active = false;
        assert!(!room.accepts_checkin());
    }

    #[test]
    fn status_roundtrip() {
        for status in &[
            RoomStatus::Available,
            RoomStatus::Occupied,
            RoomStatus::Cleaning,
            RoomStatus::Maintenance,
        ] {
            assert_eq!(&RoomStatus::from_str(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_defaults_to_available() {
        assert_eq!(RoomStatus::from_str("???"), RoomStatus::Available);
    }

    #[test]
    fn room_type_roundtrip() {
        for t in &[
            RoomType::Simple,
            RoomType::Double,
            RoomType::Matrimonial,
            RoomType::Suite,
        ] {
            assert_eq!(RoomType::from_str(t.as_str()), Some(*t));
        }
        assert_eq!(RoomType::from_str("penthouse"), None);
    }
}
