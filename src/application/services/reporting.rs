//! Reporting aggregators: pure read-side rollups, no side effects

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::domain::room::RoomStatus;
use crate::domain::{DomainResult, RepositoryProvider};

/// Room occupancy snapshot
#[derive(Debug, Clone)]
pub struct OccupancyReport {
    pub total_rooms: usize,
    pub occupied: usize,
    pub available: usize,
    pub cleaning: usize,
    pub maintenance: usize,
    /// occupied / total, in percent, 2 decimal places
    pub occupancy_rate: Decimal,
}

#[derive(Debug, Clone)]
pub struct DayRevenue {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct MethodRevenue {
    pub method: String,
    pub amount: Decimal,
}

/// Paid-payment rollup over a date range
#[derive(Debug, Clone)]
pub struct RevenueReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: Decimal,
    pub by_day: Vec<DayRevenue>,
    pub by_method: Vec<MethodRevenue>,
}

#[derive(Debug, Clone)]
pub struct NationalityCount {
    pub nationality: String,
    pub count: usize,
}

/// Guest demographics rollup
#[derive(Debug, Clone)]
pub struct DemographicsReport {
    pub total_guests: usize,
    pub frequent_guests: usize,
    pub by_nationality: Vec<NationalityCount>,
}

pub struct Reporting {
    repos: Arc<dyn RepositoryProvider>,
}

impl Reporting {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Occupancy across active rooms only; soft-deleted rooms never count.
    pub async fn occupancy(&self) -> DomainResult<OccupancyReport> {
        let rooms = self.repos.rooms().find_all(false).await?;
        let total = rooms.len();
        let count = |status: RoomStatus| rooms.iter().filter(|r| r.status == status).count();

        let occupied = count(RoomStatus::Occupied);
        let occupancy_rate = if total == 0 {
            Decimal::ZERO
        } else {
            (Decimal::from(occupied as i64) * Decimal::from(100) / Decimal::from(total as i64))
                .round_dp(2)
        };

        Ok(OccupancyReport {
            total_rooms: total,
            occupied,
            available: count(RoomStatus::Available),
            cleaning: count(RoomStatus::Cleaning),
            maintenance: count(RoomStatus::Maintenance),
            occupancy_rate,
        })
    }

    /// Revenue from paid payments recorded inside `[start_date, end_date]`,
    /// grouped by calendar day and by payment method.
    pub async fn revenue(
        &self,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> DomainResult<RevenueReport> {
        let start = Utc.from_utc_datetime(&start_date.and_time(NaiveTime::MIN));
        let end = Utc.from_utc_datetime(
            &end_date
                .succ_opt()
                .unwrap_or(end_date)
                .and_time(NaiveTime::MIN),
        );

        let payments = self.repos.payments().find_recorded_between(start, end).await?;

        let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        let mut by_method: BTreeMap<String, Decimal> = BTreeMap::new();
        let mut total = Decimal::ZERO;

        for payment in payments.iter().filter(|p| p.counts_toward_balance()) {
            total += payment.amount;
            *by_day
                .entry(payment.recorded_at.date_naive())
                .or_insert(Decimal::ZERO) += payment.amount;
            *by_method
                .entry(payment.method.clone())
                .or_insert(Decimal::ZERO) += payment.amount;
        }

        Ok(RevenueReport {
            start_date,
            end_date,
            total,
            by_day: by_day
                .into_iter()
                .map(|(date, amount)| DayRevenue { date, amount })
                .collect(),
            by_method: by_method
                .into_iter()
                .map(|(method, amount)| MethodRevenue { method, amount })
                .collect(),
        })
    }

    pub async fn demographics(&self) -> DomainResult<DemographicsReport> {
        let guests = self.repos.guests().find_all().await?;
        let mut by_nationality: BTreeMap<String, usize> = BTreeMap::new();
        for guest in &guests {
            let key = guest
                .nationality
                .clone()
                .unwrap_or_else(|| "unknown".to_string());
            *by_nationality.entry(key).or_insert(0) += 1;
        }

        Ok(DemographicsReport {
            total_guests: guests.len(),
            frequent_guests: guests.iter().filter(|g| g.frequent).count(),
            by_nationality: by_nationality
                .into_iter()
                .map(|(nationality, count)| NationalityCount { nationality, count })
                .collect(),
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::domain::guest::Guest;
    use crate::domain::payment::{Payment, PaymentStatus};
    use crate::domain::room::{Room, RoomType};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    async fn insert_room(repos: &InMemoryRepositoryProvider, number: &str, status: RoomStatus) {
        repos
            .rooms()
            .insert(Room {
                id: 0,
                number: number.into(),
                room_type: RoomType::Simple,
                capacity: 1,
                floor: 1,
                status,
                base_price: dec("50"),
                notes: None,
                active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn occupancy_counts_by_status() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        insert_room(&repos, "101", RoomStatus::Occupied).await;
        insert_room(&repos, "102", RoomStatus::Occupied).await;
        insert_room(&repos, "103", RoomStatus::Available).await;
        insert_room(&repos, "104", RoomStatus::Cleaning).await;

        let report = Reporting::new(repos).occupancy().await.unwrap();
        assert_eq!(report.total_rooms, 4);
        assert_eq!(report.occupied, 2);
        assert_eq!(report.occupancy_rate, dec("50.00"));
    }

    #[tokio::test]
    async fn occupancy_of_empty_property_is_zero() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let report = Reporting::new(repos).occupancy().await.unwrap();
        assert_eq!(report.occupancy_rate, Decimal::ZERO);
    }

    #[tokio::test]
    async fn revenue_groups_by_method_and_skips_voided() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        let today = Utc::now().date_naive();
        for (amount, method, status) in [
            ("50", "cash", PaymentStatus::Paid),
            ("30", "card", PaymentStatus::Paid),
            ("25", "cash", PaymentStatus::Paid),
            ("99", "cash", PaymentStatus::Voided),
        ] {
            repos
                .payments()
                .insert(Payment {
                    id: 0,
                    stay_id: 1,
                    amount: dec(amount),
                    method: method.into(),
                    concept: None,
                    reference: None,
                    status,
                    recorded_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let report = Reporting::new(repos)
            .revenue(today, today)
            .await
            .unwrap();
        assert_eq!(report.total, dec("105"));
        assert_eq!(report.by_method.len(), 2);
        let cash = report.by_method.iter().find(|m| m.method == "cash").unwrap();
        assert_eq!(cash.amount, dec("75"));
        assert_eq!(report.by_day.len(), 1);
        assert_eq!(report.by_day[0].amount, dec("105"));
    }

    #[tokio::test]
    async fn demographics_counts_nationalities() {
        let repos = Arc::new(InMemoryRepositoryProvider::new());
        for (doc, nationality, frequent) in [
            ("1", Some("PE"), true),
            ("2", Some("PE"), false),
            ("3", Some("AR"), false),
            ("4", None, false),
        ] {
            repos
                .guests()
                .insert(Guest {
                    id: 0,
                    document_type: "dni".into(),
                    document_number: doc.into(),
                    name: format!("Guest {}", doc),
                    surname: None,
                    phone: None,
                    email: None,
                    nationality: nationality.map(String::from),
                    frequent,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
                .await
                .unwrap();
        }

        let report = Reporting::new(repos).demographics().await.unwrap();
        assert_eq!(report.total_guests, 4);
        assert_eq!(report.frequent_guests, 1);
        let pe = report
            .by_nationality
            .iter()
            .find(|n| n.nationality == "PE")
            .unwrap();
        assert_eq!(pe.count, 2);
        assert!(report
            .by_nationality
            .iter()
            .any(|n| n.nationality == "unknown"));
    }
}
