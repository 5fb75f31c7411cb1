//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod admin_repo;
pub mod appointment_repo;
pub mod availability_repo;
pub mod specialist_repo;
pub mod specialty_repo;

pub use admin_repo::PostgresAdminDirectory;
pub use appointment_repo::PostgresAppointmentRepository;
pub use availability_repo::PostgresAvailabilityRepository;
pub use specialist_repo::PostgresSpecialistRepository;
pub use specialty_repo::PostgresSpecialtyRepository;
