//! Repository construction and the manager consumers inject.

use std::path::PathBuf;
use std::sync::Arc;

use super::local::{
    LocalAppointmentRepository, LocalBarberRepository, LocalBarbershopRepository,
    LocalClientRepository, LocalNotificationRepository, LocalServiceRepository,
    LocalUserRepository,
};
use super::traits::{
    AppointmentRepository, BarberRepository, BarbershopRepository, ClientRepository,
    NotificationRepository, ServiceRepository, UserRepository,
};
use crate::error::NavalhaResult;
use crate::session::SessionManager;
use crate::store::{FileStore, KvStore, MemoryStore};

/// Factory for repository instances over a given store.
///
/// Boxed trait objects let consumers hold the abstract contract while the
/// backend stays swappable.
///
/// Each call builds an independent instance with its own mutation lock:
/// two instances over the same store do not serialize their
/// read-modify-write saves against each other. Writers that must not
/// race each other have to share one instance, which is what
/// [`RepositoryManager`] arranges.
pub struct RepositoryFactory;

impl RepositoryFactory {
    pub fn create_user_repository(store: Arc<dyn KvStore>) -> Box<dyn UserRepository> {
        Box::new(LocalUserRepository::new(store))
    }

    pub fn create_barbershop_repository(store: Arc<dyn KvStore>) -> Box<dyn BarbershopRepository> {
        Box::new(LocalBarbershopRepository::new(store))
    }

    pub fn create_client_repository(store: Arc<dyn KvStore>) -> Box<dyn ClientRepository> {
        Box::new(LocalClientRepository::new(store))
    }

    pub fn create_barber_repository(store: Arc<dyn KvStore>) -> Box<dyn BarberRepository> {
        Box::new(LocalBarberRepository::new(store))
    }

    pub fn create_service_repository(store: Arc<dyn KvStore>) -> Box<dyn ServiceRepository> {
        Box::new(LocalServiceRepository::new(store))
    }

    pub fn create_appointment_repository(store: Arc<dyn KvStore>) -> Box<dyn AppointmentRepository> {
        Box::new(LocalAppointmentRepository::new(store))
    }

    pub fn create_notification_repository(
        store: Arc<dyn KvStore>,
    ) -> Box<dyn NotificationRepository> {
        Box::new(LocalNotificationRepository::new(store))
    }
}

/// One repository per entity over a shared store, plus the session
/// manager. The single point consumers inject instead of reaching for a
/// global namespace.
pub struct RepositoryManager {
    store: Arc<dyn KvStore>,
    // Shared with the session manager: login writes the users collection
    // and must take the same mutation lock as every other user save.
    users: Arc<LocalUserRepository>,
    barbershops: LocalBarbershopRepository,
    clients: LocalClientRepository,
    barbers: LocalBarberRepository,
    services: LocalServiceRepository,
    appointments: LocalAppointmentRepository,
    notifications: LocalNotificationRepository,
    session: SessionManager,
}

impl RepositoryManager {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        let users = Arc::new(LocalUserRepository::new(store.clone()));
        Self {
            barbershops: LocalBarbershopRepository::new(store.clone()),
            clients: LocalClientRepository::new(store.clone()),
            barbers: LocalBarberRepository::new(store.clone()),
            services: LocalServiceRepository::new(store.clone()),
            appointments: LocalAppointmentRepository::new(store.clone()),
            notifications: LocalNotificationRepository::new(store.clone()),
            session: SessionManager::new(store.clone(), users.clone()),
            users,
            store,
        }
    }

    /// Open a manager over the persistent JSON file store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> NavalhaResult<Self> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    /// Manager over an ephemeral in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn users(&self) -> &impl UserRepository {
        self.users.as_ref()
    }

    pub fn barbershops(&self) -> &impl BarbershopRepository {
        &self.barbershops
    }

    pub fn clients(&self) -> &impl ClientRepository {
        &self.clients
    }

    pub fn barbers(&self) -> &impl BarberRepository {
        &self.barbers
    }

    pub fn services(&self) -> &impl ServiceRepository {
        &self.services
    }

    pub fn appointments(&self) -> &impl AppointmentRepository {
        &self.appointments
    }

    pub fn notifications(&self) -> &impl NotificationRepository {
        &self.notifications
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub(crate) fn store(&self) -> &Arc<dyn KvStore> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_repositories() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let users = RepositoryFactory::create_user_repository(store.clone());
        let clients = RepositoryFactory::create_client_repository(store);

        // Fresh store: everything is empty, nothing errors.
        assert!(users.all().unwrap().is_empty());
        assert!(clients.all("barbershop-1").unwrap().is_empty());
    }

    #[test]
    fn test_manager_repositories_share_one_store() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        let manager = RepositoryManager::new(store.clone());

        let other_view = RepositoryFactory::create_user_repository(store);
        assert!(manager.users().all().unwrap().is_empty());
        assert!(other_view.all().unwrap().is_empty());
    }

    #[test]
    fn test_in_memory_manager_is_empty() {
        let manager = RepositoryManager::in_memory();
        assert!(manager.barbershops().all().unwrap().is_empty());
        assert!(manager.session().current().unwrap().is_none());
    }
}
