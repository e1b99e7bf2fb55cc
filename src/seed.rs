//! Idempotent first-run bootstrap.
//!
//! Seeds the default barbershop, its users, service catalogue, barber,
//! and a handful of sample clients and appointments, gated by a persisted
//! flag so calling it on every start never duplicates or resets data.
//! The barbershop is written before any scoped child, since children key
//! off its id.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info};

use crate::error::{NavalhaError, NavalhaResult};
use crate::model::{
    Appointment, AppointmentStatus, Barber, BarberStatus, Barbershop, Client, Service, Theme,
    User, UserRole, VisitFrequency, Webhooks, WorkingHours,
};
use crate::repository::{
    AppointmentRepository, BarberRepository, BarbershopRepository, ClientRepository,
    RepositoryManager, ServiceRepository, UserRepository,
};

/// Scope id of the barbershop every seed record belongs to.
pub const DEFAULT_BARBERSHOP_ID: &str = "barbershop-1";

const INITIALIZED_KEY: &str = "initialized";

/// Run the first-run bootstrap. Returns `Ok(true)` when data was seeded,
/// `Ok(false)` when the store was already initialized and nothing was
/// written.
pub fn initialize_default_data(repos: &RepositoryManager) -> NavalhaResult<bool> {
    if repos.store().contains(INITIALIZED_KEY)? {
        debug!("store already initialized, skipping seed");
        return Ok(false);
    }

    let now = Utc::now();

    repos.barbershops().save(&default_barbershop(now))?;
    repos.users().save(&creator_user(now))?;
    repos.users().save(&admin_user(now))?;
    for service in default_services(now) {
        repos.services().save(&service)?;
    }
    repos.barbers().save(&default_barber(now))?;
    for client in sample_clients()? {
        repos.clients().save(&client)?;
    }
    for appointment in sample_appointments()? {
        repos.appointments().save(&appointment)?;
    }

    repos.store().set(INITIALIZED_KEY, json!(true))?;
    info!(barbershop_id = DEFAULT_BARBERSHOP_ID, "seeded default data");
    Ok(true)
}

fn default_barbershop(now: DateTime<Utc>) -> Barbershop {
    Barbershop {
        id: DEFAULT_BARBERSHOP_ID.to_string(),
        name: "Barbearia Elegante".to_string(),
        logo: None,
        phone: "(11) 99999-9999".to_string(),
        email: "contato@barbeariaelegante.com".to_string(),
        working_hours: WorkingHours::standard(),
        webhooks: Webhooks::default(),
        theme: Theme::default(),
        created_at: now,
        updated_at: now,
    }
}

fn creator_user(now: DateTime<Utc>) -> User {
    User {
        id: "creator-1".to_string(),
        name: "Sistema".to_string(),
        email: "creator@barbershop.com".to_string(),
        phone: None,
        role: UserRole::Creator,
        barbershop_id: None,
        created_at: now,
        updated_at: now,
    }
}

fn admin_user(now: DateTime<Utc>) -> User {
    User {
        id: "admin-1".to_string(),
        name: "João Silva".to_string(),
        email: "admin@barbeariaelegante.com".to_string(),
        phone: Some("(11) 98888-8888".to_string()),
        role: UserRole::Admin,
        barbershop_id: Some(DEFAULT_BARBERSHOP_ID.to_string()),
        created_at: now,
        updated_at: now,
    }
}

fn default_services(now: DateTime<Utc>) -> Vec<Service> {
    let service = |id: &str, name: &str, description: &str, price: i64, minutes: u32| Service {
        id: id.to_string(),
        barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        price: Decimal::from(price),
        duration_minutes: minutes,
        is_active: true,
        created_at: now,
        updated_at: now,
    };
    vec![
        service("service-1", "Corte Tradicional", "Corte clássico masculino", 30, 30),
        service("service-2", "Barba", "Aparar e finalizar barba", 20, 20),
        service("service-3", "Corte + Barba", "Pacote completo", 45, 45),
    ]
}

fn default_barber(now: DateTime<Utc>) -> Barber {
    Barber {
        id: "barber-1".to_string(),
        barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
        name: "Carlos Barbeiro".to_string(),
        phone: "(11) 97777-7777".to_string(),
        email: "carlos@barbeariaelegante.com".to_string(),
        status: BarberStatus::Active,
        availability: WorkingHours::standard(),
        created_at: now,
        updated_at: now,
    }
}

fn day(year: i32, month: u32, day: u32) -> NavalhaResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        NavalhaError::Internal(format!("invalid seed date {year}-{month:02}-{day:02}"))
    })
}

fn midnight(year: i32, month: u32, d: u32) -> NavalhaResult<DateTime<Utc>> {
    Ok(Utc.from_utc_datetime(&NaiveDateTime::new(day(year, month, d)?, NaiveTime::MIN)))
}

fn sample_clients() -> NavalhaResult<Vec<Client>> {
    Ok(vec![
        Client {
            id: "client-1".to_string(),
            barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
            name: "João Silva".to_string(),
            phone: "(11) 99999-9999".to_string(),
            email: Some("joao@email.com".to_string()),
            birth_date: None,
            notes: None,
            frequency: VisitFrequency::Monthly,
            last_visit: Some(midnight(2024, 6, 15)?),
            total_visits: 15,
            total_spent: Decimal::from(675),
            created_at: midnight(2024, 1, 15)?,
            updated_at: midnight(2024, 6, 15)?,
        },
        Client {
            id: "client-2".to_string(),
            barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
            name: "Pedro Santos".to_string(),
            phone: "(11) 88888-8888".to_string(),
            email: Some("pedro@email.com".to_string()),
            birth_date: None,
            notes: None,
            frequency: VisitFrequency::Biweekly,
            last_visit: Some(midnight(2024, 6, 10)?),
            total_visits: 8,
            total_spent: Decimal::from(320),
            created_at: midnight(2024, 3, 1)?,
            updated_at: midnight(2024, 6, 10)?,
        },
    ])
}

fn sample_appointments() -> NavalhaResult<Vec<Appointment>> {
    Ok(vec![
        Appointment {
            id: "appointment-1".to_string(),
            barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
            client_id: "client-1".to_string(),
            barber_id: "barber-1".to_string(),
            service_id: "service-2".to_string(),
            date: day(2024, 6, 22)?,
            time: "09:00".to_string(),
            status: AppointmentStatus::Confirmed,
            price: Decimal::from(45),
            notes: None,
            created_at: midnight(2024, 6, 20)?,
            updated_at: midnight(2024, 6, 21)?,
        },
        Appointment {
            id: "appointment-2".to_string(),
            barbershop_id: DEFAULT_BARBERSHOP_ID.to_string(),
            client_id: "client-2".to_string(),
            barber_id: "barber-1".to_string(),
            service_id: "service-1".to_string(),
            date: day(2024, 6, 22)?,
            time: "10:30".to_string(),
            status: AppointmentStatus::Scheduled,
            price: Decimal::from(30),
            notes: None,
            created_at: midnight(2024, 6, 21)?,
            updated_at: midnight(2024, 6, 21)?,
        },
    ])
}
