//! Repository trait definitions
//!
//! These traits are the abstract read/write contract consumers depend on.
//! Different implementations can provide different storage backends.

use chrono::NaiveDate;

use crate::error::NavalhaResult;
use crate::model::{
    Appointment, Barber, Barbershop, Client, Notification, Service, User,
};

/// Repository for the global user directory.
///
/// Users are unscoped; a creator account exists before any barbershop does.
pub trait UserRepository: Send + Sync {
    /// Every user, in insertion order.
    fn all(&self) -> NavalhaResult<Vec<User>>;

    /// Insert or replace the record with the same id.
    fn save(&self, user: &User) -> NavalhaResult<()>;

    fn find_by_id(&self, id: &str) -> NavalhaResult<Option<User>> {
        Ok(self.all()?.into_iter().find(|u| u.id == id))
    }

    /// Case-insensitive email lookup. A miss is `Ok(None)`, never an error.
    fn find_by_email(&self, email: &str) -> NavalhaResult<Option<User>> {
        let email = email.to_lowercase();
        Ok(self
            .all()?
            .into_iter()
            .find(|u| u.email.to_lowercase() == email))
    }
}

/// Repository for barbershops. Unscoped, and without delete: a tenant is
/// never removed through this contract.
pub trait BarbershopRepository: Send + Sync {
    fn all(&self) -> NavalhaResult<Vec<Barbershop>>;

    fn save(&self, barbershop: &Barbershop) -> NavalhaResult<()>;

    fn find_by_id(&self, id: &str) -> NavalhaResult<Option<Barbershop>> {
        Ok(self.all()?.into_iter().find(|b| b.id == id))
    }
}

/// Repository for a barbershop's clients.
pub trait ClientRepository: Send + Sync {
    /// Every client of `barbershop_id`, in insertion order.
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Client>>;

    /// Insert or replace. Rejects a phone already registered to another
    /// client of the same barbershop (digits-only comparison).
    fn save(&self, client: &Client) -> NavalhaResult<()>;

    /// Remove by id. Idempotent; a missing id is a no-op.
    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()>;

    fn find_by_id(&self, barbershop_id: &str, id: &str) -> NavalhaResult<Option<Client>> {
        Ok(self.all(barbershop_id)?.into_iter().find(|c| c.id == id))
    }
}

/// Repository for a barbershop's barbers.
pub trait BarberRepository: Send + Sync {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Barber>>;

    fn save(&self, barber: &Barber) -> NavalhaResult<()>;

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()>;

    fn find_by_id(&self, barbershop_id: &str, id: &str) -> NavalhaResult<Option<Barber>> {
        Ok(self.all(barbershop_id)?.into_iter().find(|b| b.id == id))
    }
}

/// Repository for a barbershop's service catalogue.
pub trait ServiceRepository: Send + Sync {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Service>>;

    /// Insert or replace. Rejects negative prices and zero durations.
    fn save(&self, service: &Service) -> NavalhaResult<()>;

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()>;

    fn find_by_id(&self, barbershop_id: &str, id: &str) -> NavalhaResult<Option<Service>> {
        Ok(self.all(barbershop_id)?.into_iter().find(|s| s.id == id))
    }
}

/// Repository for a barbershop's appointments.
pub trait AppointmentRepository: Send + Sync {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Appointment>>;

    /// Insert or replace. Rejects a save that would double-book a barber:
    /// another non-cancelled appointment with the same barber, date and
    /// time.
    fn save(&self, appointment: &Appointment) -> NavalhaResult<()>;

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()>;

    fn find_by_id(&self, barbershop_id: &str, id: &str) -> NavalhaResult<Option<Appointment>> {
        Ok(self.all(barbershop_id)?.into_iter().find(|a| a.id == id))
    }

    /// The appointment already occupying a barber's slot, if any.
    /// `exclude_id` skips the record being edited so an update does not
    /// conflict with itself.
    fn find_conflict(
        &self,
        barbershop_id: &str,
        barber_id: &str,
        date: NaiveDate,
        time: &str,
        exclude_id: Option<&str>,
    ) -> NavalhaResult<Option<Appointment>> {
        Ok(self.all(barbershop_id)?.into_iter().find(|a| {
            a.barber_id == barber_id
                && a.date == date
                && a.time == time
                && a.status.blocks_slot()
                && exclude_id != Some(a.id.as_str())
        }))
    }
}

/// Repository for dashboard notifications. Append-only: no delete, and
/// the only mutation is marking a notification read.
pub trait NotificationRepository: Send + Sync {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Notification>>;

    /// Append a notification. Always appends; ids are expected fresh.
    fn push(&self, notification: &Notification) -> NavalhaResult<()>;

    /// Flip `is_read` to true. A missing id is a no-op.
    fn mark_read(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()>;

    fn unread_count(&self, barbershop_id: &str) -> NavalhaResult<usize> {
        Ok(self
            .all(barbershop_id)?
            .iter()
            .filter(|n| !n.is_read)
            .count())
    }
}
