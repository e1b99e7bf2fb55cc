use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AppointmentReminder,
    AppointmentConfirmed,
    AppointmentCancelled,
    ClientInactive,
}

/// Append-only dashboard notification. The only permitted mutation after
/// creation is flipping `is_read` from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub barbershop_id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub is_read: bool,
    /// Id of the appointment or client this refers to, when any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        barbershop_id: &str,
        kind: NotificationKind,
        title: &str,
        message: &str,
        related_id: Option<String>,
    ) -> Self {
        Self {
            id: super::new_id("notification"),
            barbershop_id: barbershop_id.to_string(),
            kind,
            title: title.to_string(),
            message: message.to_string(),
            is_read: false,
            related_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notification_is_unread() {
        let n = Notification::new(
            "barbershop-1",
            NotificationKind::AppointmentConfirmed,
            "Agendamento confirmado",
            "Corte Tradicional às 09:00",
            Some("appointment-1".to_string()),
        );
        assert!(!n.is_read);
        assert!(n.id.starts_with("notification-"));
    }

    #[test]
    fn test_kind_wire_name_is_type() {
        let n = Notification::new(
            "barbershop-1",
            NotificationKind::ClientInactive,
            "Cliente sumiu",
            "Pedro Santos está há 60 dias sem visita",
            None,
        );
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["type"], "client_inactive");
        assert!(json.get("kind").is_none());
        assert!(json.get("relatedId").is_none());
    }
}
