//! Form-controller layer for the cadastro registration system.
//!
//! Bridges user input to the validation schema and the record store: one
//! service per screen (registration, login, profile edit/listing), plus the
//! profile-image transcoding helper and the feedback/navigation values the
//! presentation surfaces consume.

pub mod bootstrap;
pub mod feedback;
pub mod image;
pub mod login_service;
pub mod profile_service;
pub mod registration_service;

pub use bootstrap::CadastroApp;
pub use feedback::{Feedback, FeedbackKind, POST_SUBMIT_DELAY, Redirect, Screen};
pub use image::{attach_profile_image, encode_profile_image};
pub use login_service::{LoginOutcome, LoginService};
pub use profile_service::{PendingUpdate, PrepareOutcome, ProfileOutcome, ProfileService};
pub use registration_service::{RegistrationOutcome, RegistrationService};
