//! Key-value-backed repository implementations.
//!
//! Each collection lives under one store key holding a JSON array:
//! `users` and `barbershops` globally, `clients:{barbershopId}` and
//! friends per tenant. A save is a read-modify-write of the whole
//! collection (replace the element with the matching id, or append),
//! serialized behind a per-repository lock so a uniqueness or conflict
//! check can never race the write it guards within this process.

use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::traits::{
    AppointmentRepository, BarberRepository, BarbershopRepository, ClientRepository,
    NotificationRepository, ServiceRepository, UserRepository,
};
use crate::error::{NavalhaError, NavalhaResult};
use crate::model::{Appointment, Barber, Barbershop, Client, Notification, Service, User};
use crate::store::KvStore;
use crate::validation::{normalize_phone, require_id, require_phone, require_time};

const USERS_KEY: &str = "users";
const BARBERSHOPS_KEY: &str = "barbershops";
const CLIENTS_PREFIX: &str = "clients";
const BARBERS_PREFIX: &str = "barbers";
const SERVICES_PREFIX: &str = "services";
const APPOINTMENTS_PREFIX: &str = "appointments";
const NOTIFICATIONS_PREFIX: &str = "notifications";

fn scoped_key(prefix: &str, barbershop_id: &str) -> String {
    format!("{prefix}:{barbershop_id}")
}

/// Read a collection. A missing key is an empty collection, and so is a
/// corrupt value: unreadable persisted data degrades to "no data" with a
/// warning instead of surfacing a parse error to every caller.
fn load_collection<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> NavalhaResult<Vec<T>> {
    match store.get(key)? {
        None => Ok(Vec::new()),
        Some(value) => match serde_json::from_value(value) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(key, %err, "stored collection is corrupt, treating as empty");
                Ok(Vec::new())
            }
        },
    }
}

fn persist_collection<T: Serialize>(
    store: &dyn KvStore,
    key: &str,
    items: &[T],
) -> NavalhaResult<()> {
    store.set(key, serde_json::to_value(items)?)
}

fn upsert_by_id<T>(items: &mut Vec<T>, item: T, id_of: impl Fn(&T) -> &str, id: &str) {
    match items.iter_mut().find(|existing| id_of(existing) == id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

// ============================================================================
// Users
// ============================================================================

pub struct LocalUserRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalUserRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl UserRepository for LocalUserRepository {
    fn all(&self) -> NavalhaResult<Vec<User>> {
        load_collection(self.store.as_ref(), USERS_KEY)
    }

    fn save(&self, user: &User) -> NavalhaResult<()> {
        require_id("id", &user.id)?;
        require_id("email", &user.email)?;

        let _guard = self.write_lock.lock()?;
        let mut users: Vec<User> = load_collection(self.store.as_ref(), USERS_KEY)?;

        let email = user.email.to_lowercase();
        if users
            .iter()
            .any(|u| u.id != user.id && u.email.to_lowercase() == email)
        {
            return Err(NavalhaError::DuplicateEmail(user.email.clone()));
        }

        upsert_by_id(&mut users, user.clone(), |u| &u.id, &user.id);
        persist_collection(self.store.as_ref(), USERS_KEY, &users)
    }
}

// ============================================================================
// Barbershops
// ============================================================================

pub struct LocalBarbershopRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalBarbershopRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl BarbershopRepository for LocalBarbershopRepository {
    fn all(&self) -> NavalhaResult<Vec<Barbershop>> {
        load_collection(self.store.as_ref(), BARBERSHOPS_KEY)
    }

    fn save(&self, barbershop: &Barbershop) -> NavalhaResult<()> {
        require_id("id", &barbershop.id)?;

        let _guard = self.write_lock.lock()?;
        let mut barbershops: Vec<Barbershop> =
            load_collection(self.store.as_ref(), BARBERSHOPS_KEY)?;
        upsert_by_id(&mut barbershops, barbershop.clone(), |b| &b.id, &barbershop.id);
        persist_collection(self.store.as_ref(), BARBERSHOPS_KEY, &barbershops)
    }
}

// ============================================================================
// Clients
// ============================================================================

pub struct LocalClientRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalClientRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl ClientRepository for LocalClientRepository {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Client>> {
        require_id("barbershopId", barbershop_id)?;
        load_collection(self.store.as_ref(), &scoped_key(CLIENTS_PREFIX, barbershop_id))
    }

    fn save(&self, client: &Client) -> NavalhaResult<()> {
        require_id("id", &client.id)?;
        require_id("barbershopId", &client.barbershop_id)?;
        let digits = require_phone(&client.phone)?;

        let key = scoped_key(CLIENTS_PREFIX, &client.barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut clients: Vec<Client> = load_collection(self.store.as_ref(), &key)?;

        if clients
            .iter()
            .any(|c| c.id != client.id && normalize_phone(&c.phone) == digits)
        {
            return Err(NavalhaError::DuplicatePhone(client.phone.clone()));
        }

        upsert_by_id(&mut clients, client.clone(), |c| &c.id, &client.id);
        persist_collection(self.store.as_ref(), &key, &clients)
    }

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()> {
        require_id("barbershopId", barbershop_id)?;
        require_id("id", id)?;

        let key = scoped_key(CLIENTS_PREFIX, barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut clients: Vec<Client> = load_collection(self.store.as_ref(), &key)?;
        let before = clients.len();
        clients.retain(|c| c.id != id);
        if clients.len() == before {
            return Ok(());
        }
        persist_collection(self.store.as_ref(), &key, &clients)
    }
}

// ============================================================================
// Barbers
// ============================================================================

pub struct LocalBarberRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalBarberRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl BarberRepository for LocalBarberRepository {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Barber>> {
        require_id("barbershopId", barbershop_id)?;
        load_collection(self.store.as_ref(), &scoped_key(BARBERS_PREFIX, barbershop_id))
    }

    fn save(&self, barber: &Barber) -> NavalhaResult<()> {
        require_id("id", &barber.id)?;
        require_id("barbershopId", &barber.barbershop_id)?;

        let key = scoped_key(BARBERS_PREFIX, &barber.barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut barbers: Vec<Barber> = load_collection(self.store.as_ref(), &key)?;
        upsert_by_id(&mut barbers, barber.clone(), |b| &b.id, &barber.id);
        persist_collection(self.store.as_ref(), &key, &barbers)
    }

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()> {
        require_id("barbershopId", barbershop_id)?;
        require_id("id", id)?;

        let key = scoped_key(BARBERS_PREFIX, barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut barbers: Vec<Barber> = load_collection(self.store.as_ref(), &key)?;
        let before = barbers.len();
        barbers.retain(|b| b.id != id);
        if barbers.len() == before {
            return Ok(());
        }
        persist_collection(self.store.as_ref(), &key, &barbers)
    }
}

// ============================================================================
// Services
// ============================================================================

pub struct LocalServiceRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalServiceRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl ServiceRepository for LocalServiceRepository {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Service>> {
        require_id("barbershopId", barbershop_id)?;
        load_collection(self.store.as_ref(), &scoped_key(SERVICES_PREFIX, barbershop_id))
    }

    fn save(&self, service: &Service) -> NavalhaResult<()> {
        require_id("id", &service.id)?;
        require_id("barbershopId", &service.barbershop_id)?;
        if service.price < Decimal::ZERO {
            return Err(NavalhaError::NegativePrice);
        }
        if service.duration_minutes == 0 {
            return Err(NavalhaError::ZeroDuration);
        }

        let key = scoped_key(SERVICES_PREFIX, &service.barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut services: Vec<Service> = load_collection(self.store.as_ref(), &key)?;
        upsert_by_id(&mut services, service.clone(), |s| &s.id, &service.id);
        persist_collection(self.store.as_ref(), &key, &services)
    }

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()> {
        require_id("barbershopId", barbershop_id)?;
        require_id("id", id)?;

        let key = scoped_key(SERVICES_PREFIX, barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut services: Vec<Service> = load_collection(self.store.as_ref(), &key)?;
        let before = services.len();
        services.retain(|s| s.id != id);
        if services.len() == before {
            return Ok(());
        }
        persist_collection(self.store.as_ref(), &key, &services)
    }
}

// ============================================================================
// Appointments
// ============================================================================

pub struct LocalAppointmentRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalAppointmentRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl AppointmentRepository for LocalAppointmentRepository {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Appointment>> {
        require_id("barbershopId", barbershop_id)?;
        load_collection(
            self.store.as_ref(),
            &scoped_key(APPOINTMENTS_PREFIX, barbershop_id),
        )
    }

    fn save(&self, appointment: &Appointment) -> NavalhaResult<()> {
        require_id("id", &appointment.id)?;
        require_id("barbershopId", &appointment.barbershop_id)?;
        require_id("clientId", &appointment.client_id)?;
        require_id("barberId", &appointment.barber_id)?;
        require_id("serviceId", &appointment.service_id)?;
        require_time(&appointment.time)?;

        let key = scoped_key(APPOINTMENTS_PREFIX, &appointment.barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut appointments: Vec<Appointment> = load_collection(self.store.as_ref(), &key)?;

        // A cancelled record neither occupies a slot nor needs one.
        if appointment.status.blocks_slot() {
            let taken = appointments.iter().find(|a| {
                a.id != appointment.id
                    && a.barber_id == appointment.barber_id
                    && a.date == appointment.date
                    && a.time == appointment.time
                    && a.status.blocks_slot()
            });
            if taken.is_some() {
                return Err(NavalhaError::AppointmentConflict {
                    barber_id: appointment.barber_id.clone(),
                    date: appointment.date,
                    time: appointment.time.clone(),
                });
            }
        }

        upsert_by_id(&mut appointments, appointment.clone(), |a| &a.id, &appointment.id);
        persist_collection(self.store.as_ref(), &key, &appointments)
    }

    fn delete(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()> {
        require_id("barbershopId", barbershop_id)?;
        require_id("id", id)?;

        let key = scoped_key(APPOINTMENTS_PREFIX, barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut appointments: Vec<Appointment> = load_collection(self.store.as_ref(), &key)?;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        if appointments.len() == before {
            return Ok(());
        }
        persist_collection(self.store.as_ref(), &key, &appointments)
    }
}

// ============================================================================
// Notifications
// ============================================================================

pub struct LocalNotificationRepository {
    store: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl LocalNotificationRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

impl NotificationRepository for LocalNotificationRepository {
    fn all(&self, barbershop_id: &str) -> NavalhaResult<Vec<Notification>> {
        require_id("barbershopId", barbershop_id)?;
        load_collection(
            self.store.as_ref(),
            &scoped_key(NOTIFICATIONS_PREFIX, barbershop_id),
        )
    }

    fn push(&self, notification: &Notification) -> NavalhaResult<()> {
        require_id("id", &notification.id)?;
        require_id("barbershopId", &notification.barbershop_id)?;

        let key = scoped_key(NOTIFICATIONS_PREFIX, &notification.barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut notifications: Vec<Notification> = load_collection(self.store.as_ref(), &key)?;
        notifications.push(notification.clone());
        persist_collection(self.store.as_ref(), &key, &notifications)
    }

    fn mark_read(&self, barbershop_id: &str, id: &str) -> NavalhaResult<()> {
        require_id("barbershopId", barbershop_id)?;
        require_id("id", id)?;

        let key = scoped_key(NOTIFICATIONS_PREFIX, barbershop_id);
        let _guard = self.write_lock.lock()?;
        let mut notifications: Vec<Notification> = load_collection(self.store.as_ref(), &key)?;
        let Some(notification) = notifications.iter_mut().find(|n| n.id == id) else {
            return Ok(());
        };
        if notification.is_read {
            return Ok(());
        }
        notification.is_read = true;
        persist_collection(self.store.as_ref(), &key, &notifications)
    }
}
