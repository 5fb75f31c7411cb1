//! SeaORM entities
//!
//! Database-facing models, kept separate from the domain entities in
//! `domain::entities`. Table DDL (including the partial unique index over
//! active appointment statuses) lives in `schema.sql`.

pub mod admins;
pub mod appointments;
pub mod availabilities;
pub mod specialists;
pub mod specialties;
