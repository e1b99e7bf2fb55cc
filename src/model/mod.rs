//! Entity model: pure data records persisted by the repository layer.
//!
//! Every record carries a caller-supplied string id. Persisted form is
//! camelCase JSON with RFC 3339 timestamps, matching the interchange
//! convention of the admin dashboard that consumes this crate.

mod appointment;
mod barber;
mod barbershop;
mod client;
mod notification;
mod service;
mod user;

pub use appointment::{Appointment, AppointmentStatus};
pub use barber::{Barber, BarberStatus};
pub use barbershop::{Barbershop, DaySchedule, Theme, WebhookConfig, Webhooks, WorkingHours};
pub use client::{Client, VisitFrequency};
pub use notification::{Notification, NotificationKind};
pub use service::Service;
pub use user::{User, UserRole};

use uuid::Uuid;

/// Build a fresh record id with a readable entity prefix, e.g.
/// `"client-6f9619ff-8b86-4d01-b42d-00cf4fc964ff"`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}
