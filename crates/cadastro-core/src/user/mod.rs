//! User domain module.
//!
//! This module contains the user record model, the raw candidate (draft)
//! forms of it, and the repository traits for persistence.
//!
//! # Module Structure
//!
//! - `model`: typed record and its closed choice sets
//! - `request`: raw draft types produced by forms
//! - `repository`: persistence traits and operation outcomes

mod model;
mod repository;
mod request;

// Re-export public API
pub use model::{AcademicEntry, Degree, Gender, TechArea, Uf, UserRecord};
pub use repository::{
    CreateOutcome, DeleteOutcome, SessionRepository, UpdateOutcome, UserRepository,
};
pub use request::{AcademicEntryDraft, StateChoice, UserDraft};
