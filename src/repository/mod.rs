//! The storage layer: per-entity repositories over a key-value store.
//!
//! `traits` defines the contract, `local` the key-value-backed
//! implementations, `factory` the construction and the injectable
//! manager.

mod factory;
mod local;
mod traits;

pub use factory::{RepositoryFactory, RepositoryManager};
pub use local::{
    LocalAppointmentRepository, LocalBarberRepository, LocalBarbershopRepository,
    LocalClientRepository, LocalNotificationRepository, LocalServiceRepository,
    LocalUserRepository,
};
pub use traits::{
    AppointmentRepository, BarberRepository, BarbershopRepository, ClientRepository,
    NotificationRepository, ServiceRepository, UserRepository,
};
