//! Report DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::services::reporting::{
    DayRevenue, DemographicsReport, MethodRevenue, NationalityCount, OccupancyReport,
    RevenueReport,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct OccupancyReportDto {
    pub total_rooms: usize,
    pub occupied: usize,
    pub available: usize,
    pub cleaning: usize,
    pub maintenance: usize,
    /// occupied / total, in percent
    pub occupancy_rate: Decimal,
}

impl From<OccupancyReport> for OccupancyReportDto {
    fn from(r: OccupancyReport) -> Self {
        Self {
            total_rooms: r.total_rooms,
            occupied: r.occupied,
            available: r.available,
            cleaning: r.cleaning,
            maintenance: r.maintenance,
            occupancy_rate: r.occupancy_rate,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayRevenueDto {
    pub date: NaiveDate,
    pub amount: Decimal,
}

impl From<DayRevenue> for DayRevenueDto {
    fn from(d: DayRevenue) -> Self {
        Self {
            date: d.date,
            amount: d.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MethodRevenueDto {
    pub method: String,
    pub amount: Decimal,
}

impl From<MethodRevenue> for MethodRevenueDto {
    fn from(m: MethodRevenue) -> Self {
        Self {
            method: m.method,
            amount: m.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueReportDto {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total: Decimal,
    pub by_day: Vec<DayRevenueDto>,
    pub by_method: Vec<MethodRevenueDto>,
}

impl From<RevenueReport> for RevenueReportDto {
    fn from(r: RevenueReport) -> Self {
        Self {
            start_date: r.start_date,
            end_date: r.end_date,
            total: r.total,
            by_day: r.by_day.into_iter().map(Into::into).collect(),
            by_method: r.by_method.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NationalityCountDto {
    pub nationality: String,
    pub count: usize,
}

impl From<NationalityCount> for NationalityCountDto {
    fn from(n: NationalityCount) -> Self {
        Self {
            nationality: n.nationality,
            count: n.count,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DemographicsReportDto {
    pub total_guests: usize,
    pub frequent_guests: usize,
    pub by_nationality: Vec<NationalityCountDto>,
}

impl From<DemographicsReport> for DemographicsReportDto {
    fn from(r: DemographicsReport) -> Self {
        Self {
            total_guests: r.total_guests,
            frequent_guests: r.frequent_guests,
            by_nationality: r.by_nationality.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct RevenueQuery {
    /// First day, inclusive
    pub start_date: NaiveDate,
    /// Last day, inclusive
    pub end_date: NaiveDate,
}
