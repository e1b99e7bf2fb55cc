use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    /// Cancelled appointments release their slot and never count toward
    /// barber time conflicts.
    pub fn blocks_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub barbershop_id: String,
    pub client_id: String,
    pub barber_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    /// `HH:MM` wall-clock slot start.
    pub time: String,
    pub status: AppointmentStatus,
    pub price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_form() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::NoShow).unwrap(),
            "no_show"
        );
        assert_eq!(
            serde_json::to_value(AppointmentStatus::Scheduled).unwrap(),
            "scheduled"
        );
    }

    #[test]
    fn test_cancelled_releases_slot() {
        assert!(AppointmentStatus::Scheduled.blocks_slot());
        assert!(AppointmentStatus::NoShow.blocks_slot());
        assert!(!AppointmentStatus::Cancelled.blocks_slot());
    }

    #[test]
    fn test_date_wire_form() {
        let appointment = Appointment {
            id: "appointment-1".to_string(),
            barbershop_id: "barbershop-1".to_string(),
            client_id: "client-1".to_string(),
            barber_id: "barber-1".to_string(),
            service_id: "service-2".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 22).unwrap(),
            time: "09:00".to_string(),
            status: AppointmentStatus::Confirmed,
            price: Decimal::from(45),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&appointment).unwrap();
        assert_eq!(json["date"], "2024-06-22");
        assert_eq!(json["time"], "09:00");
    }
}
