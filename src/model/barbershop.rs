use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One tenant of the system. Owns every scoped entity keyed by its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Barbershop {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub phone: String,
    pub email: String,
    pub working_hours: WorkingHours,
    pub webhooks: Webhooks,
    pub theme: Theme,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Weekly schedule with exactly one entry per weekday. The fixed fields
/// are the structural guarantee behind the "exactly 7 day entries"
/// invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub is_open: bool,
    /// `HH:MM`; meaningful only while `is_open` is true.
    pub open_time: String,
    pub close_time: String,
}

impl DaySchedule {
    pub fn open(open_time: &str, close_time: &str) -> Self {
        Self {
            is_open: true,
            open_time: open_time.to_string(),
            close_time: close_time.to_string(),
        }
    }

    pub fn closed() -> Self {
        Self {
            is_open: false,
            open_time: "00:00".to_string(),
            close_time: "00:00".to_string(),
        }
    }
}

impl WorkingHours {
    /// The default schedule: weekdays 08:00-18:00, Saturday 08:00-16:00,
    /// closed on Sunday.
    pub fn standard() -> Self {
        Self {
            monday: DaySchedule::open("08:00", "18:00"),
            tuesday: DaySchedule::open("08:00", "18:00"),
            wednesday: DaySchedule::open("08:00", "18:00"),
            thursday: DaySchedule::open("08:00", "18:00"),
            friday: DaySchedule::open("08:00", "18:00"),
            saturday: DaySchedule::open("08:00", "16:00"),
            sunday: DaySchedule::closed(),
        }
    }
}

/// The three outbound notification targets a barbershop can configure.
/// Stored as data only; dispatching is not this crate's concern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhooks {
    pub appointment_confirmed: WebhookConfig,
    pub appointment_reminder: WebhookConfig,
    pub inactive_client: WebhookConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookConfig {
    pub url: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub primary_color: String,
    pub secondary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#D4AF37".to_string(),
            secondary_color: "#F4E4BC".to_string(),
            logo: None,
            favicon: None,
        }
    }
}
