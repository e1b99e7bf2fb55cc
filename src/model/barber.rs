use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WorkingHours;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarberStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barber {
    pub id: String,
    pub barbershop_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: BarberStatus,
    /// Same weekly shape as the barbershop's working hours.
    pub availability: WorkingHours,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
