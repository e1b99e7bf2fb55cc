use chrono::NaiveDate;
use thiserror::Error;

/// Central error type for the navalha core
#[derive(Error, Debug)]
pub enum NavalhaError {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),

    #[error("Phone number {0:?} has too few digits")]
    PhoneTooShort(String),

    #[error("Service price cannot be negative")]
    NegativePrice,

    #[error("Service duration must be greater than zero minutes")]
    ZeroDuration,

    // ============================================================================
    // Uniqueness / Conflict Errors
    // ============================================================================
    #[error("Email {0} is already registered to another user")]
    DuplicateEmail(String),

    #[error("Phone {0} is already registered to another client of this barbershop")]
    DuplicatePhone(String),

    #[error("Barber {barber_id} already has an appointment on {date} at {time}")]
    AppointmentConflict {
        barber_id: String,
        date: NaiveDate,
        time: String,
    },

    // ============================================================================
    // Storage Errors
    // ============================================================================
    #[error("Failed to persist store: {0}")]
    StoreSave(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store lock poisoned")]
    Lock,

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

// A poisoned lock means a writer panicked mid-mutation.
impl<T> From<std::sync::PoisonError<T>> for NavalhaError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        NavalhaError::Lock
    }
}

// Conversion to String for UI boundaries
impl From<NavalhaError> for String {
    fn from(error: NavalhaError) -> Self {
        error.to_string()
    }
}

/// Helper type alias for Results
pub type NavalhaResult<T> = Result<T, NavalhaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NavalhaError::MissingField("barbershopId");
        assert_eq!(err.to_string(), "Missing required field: barbershopId");
    }

    #[test]
    fn test_error_conversion_to_string() {
        let err = NavalhaError::DuplicateEmail("admin@barbeariaelegante.com".to_string());
        let s: String = err.into();
        assert!(s.contains("admin@barbeariaelegante.com"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NavalhaError = io_err.into();
        assert!(matches!(err, NavalhaError::Io(_)));
    }

    #[test]
    fn test_appointment_conflict_display() {
        let err = NavalhaError::AppointmentConflict {
            barber_id: "barber-1".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 22).unwrap(),
            time: "09:00".to_string(),
        };
        assert!(err.to_string().contains("barber-1"));
        assert!(err.to_string().contains("2024-06-22"));
        assert!(err.to_string().contains("09:00"));
    }
}
