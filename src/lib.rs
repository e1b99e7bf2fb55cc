//! Barbershop management core.
//!
//! Typed entity records, per-entity repositories over a local key-value
//! store, a session pointer independent of the user directory, and an
//! idempotent first-run seed. Everything is synchronous; consumers (the
//! admin dashboard) render what the repositories return and hold no
//! persisted state of their own.
//!
//! ```no_run
//! use navalha::repository::RepositoryManager;
//! use navalha::seed::initialize_default_data;
//!
//! # fn main() -> navalha::NavalhaResult<()> {
//! let repos = RepositoryManager::open("navalha-store.json")?;
//! initialize_default_data(&repos)?;
//! # Ok(())
//! # }
//! ```
//!
//! Repositories serialize their mutations within one process; pointing
//! two processes at the same store file is not supported.

pub mod error;
pub mod model;
pub mod repository;
pub mod seed;
pub mod session;
pub mod store;
pub mod validation;

pub use error::{NavalhaError, NavalhaResult};
pub use repository::RepositoryManager;
pub use session::SessionManager;
