//! Service order domain entity: housekeeping and maintenance work items

use chrono::{DateTime, Utc};

/// Kind of work requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    Cleaning,
    /// Created automatically when a stay checks out
    CleaningAfterCheckout,
    Maintenance,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cleaning => "cleaning",
            Self::CleaningAfterCheckout => "cleaning_after_checkout",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "cleaning_after_checkout" => Self::CleaningAfterCheckout,
            "maintenance" => Self::Maintenance,
            _ => Self::Cleaning,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Pending,
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderPriority {
    Low,
    Normal,
    High,
}

impl OrderPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A housekeeping or maintenance work item.
///
/// Completing a cleaning order is the only automatic path returning a room
/// from `cleaning` to `available`.
#[derive(Debug, Clone)]
pub struct ServiceOrder {
    pub id: i32,
    pub room_id: Option<i32>,
    pub service_type: ServiceType,
    pub status: OrderStatus,
    pub priority: OrderPriority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Username of whoever resolved the order
    pub resolved_by: Option<String>,
}

impl ServiceOrder {
    /// The order created automatically on checkout
    pub fn after_checkout(room_id: i32, notes: impl Into<String>) -> Self {
        Self {
            id: 0,
            room_id: Some(room_id),
            service_type: ServiceType::CleaningAfterCheckout,
            status: OrderStatus::Pending,
            priority: OrderPriority::High,
            notes: Some(notes.into()),
            created_at: Utc::now(),
            completed_at: None,
            resolved_by: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_checkout_order_shape() {
        let order = ServiceOrder::after_checkout(7, "Room 101 after Ana Pérez");
        assert_eq!(order.room_id, Some(7));
        assert_eq!(order.service_type, ServiceType::CleaningAfterCheckout);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.priority, OrderPriority::High);
        assert!(order.is_pending());
    }

    #[test]
    fn enum_roundtrips() {
        for t in &[
            ServiceType::Cleaning,
            ServiceType::CleaningAfterCheckout,
            ServiceType::Maintenance,
        ] {
            assert_eq!(&ServiceType::from_str(t.as_str()), t);
        }
        for s in &[
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(&OrderStatus::from_str(s.as_str()), s);
        }
        for p in &[OrderPriority::Low, OrderPriority::Normal, OrderPriority::High] {
            assert_eq!(&OrderPriority::from_str(p.as_str()), p);
        }
    }
}
