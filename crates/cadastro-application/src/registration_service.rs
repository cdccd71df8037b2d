//! Registration use case.
//!
//! Bridges a submitted registration draft to the validation schema and the
//! record store. A submission moves from editing through exactly one of the
//! terminal outcomes below; there are no retries inside the service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cadastro_core::error::Result;
use cadastro_core::schema::{self, ValidationErrors};
use cadastro_core::user::{CreateOutcome, SessionRepository, UserDraft, UserRepository};

use crate::feedback::{Feedback, Redirect};

/// Terminal outcome of one registration submission.
///
/// The email-taken and wrong-password cases are distinct on purpose: the
/// first means the address belongs to someone else, the second that a
/// returning user mistyped their password. A full match on name and password
/// is treated as that user coming back, not as a conflict.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// A new record was created and the session now points at it.
    Registered { name: String },
    /// The email, name, and password all matched an existing record; the
    /// user was logged back in without touching the stored record.
    ReturningUser { name: String },
    /// The email is registered under a different name.
    EmailTaken,
    /// The email and name matched but the password did not.
    IncorrectPassword,
    /// The draft failed schema validation; nothing was stored.
    Invalid(ValidationErrors),
}

impl RegistrationOutcome {
    /// The feedback message to show, if the outcome carries one.
    ///
    /// Validation failures render per-field messages instead of a single
    /// banner, so `Invalid` yields none.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::Registered { name } => Some(Feedback::success(format!(
                "Cadastro realizado com sucesso, {name}!"
            ))),
            Self::ReturningUser { name } => {
                Some(Feedback::success(format!("Bem-vindo(a) de volta, {name}!")))
            }
            Self::EmailTaken => Some(Feedback::error("Email já em uso.")),
            Self::IncorrectPassword => Some(Feedback::error("Senha incorreta.")),
            Self::Invalid(_) => None,
        }
    }

    /// Where to navigate after this outcome, if anywhere.
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Registered { .. } | Self::ReturningUser { .. } => Some(Redirect::to_welcome()),
            _ => None,
        }
    }
}

/// Use case for the registration screen.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
    session: Arc<dyn SessionRepository>,
}

impl RegistrationService {
    /// Creates a new `RegistrationService` over the given repositories.
    pub fn new(users: Arc<dyn UserRepository>, session: Arc<dyn SessionRepository>) -> Self {
        Self { users, session }
    }

    /// Handles one submission of the registration form.
    ///
    /// Normalizes the identifying fields (email trimmed and lowercased, name
    /// trimmed), validates the whole draft, then decides against the store:
    /// unknown email registers a new user, a known email either logs the
    /// returning user back in or reports the matching conflict.
    pub async fn register(&self, mut draft: UserDraft) -> Result<RegistrationOutcome> {
        draft.name = draft.name.trim().to_string();
        draft.email = draft.email.trim().to_lowercase();

        let record = match schema::validate(&draft) {
            Ok(record) => record,
            Err(errors) => return Ok(RegistrationOutcome::Invalid(errors)),
        };

        match self.users.find_by_email(&record.email).await? {
            None => {
                let mut record = record;
                record.id = Uuid::new_v4().to_string();

                if self.users.create_user(&record).await? == CreateOutcome::AlreadyExists {
                    // Lost a race with another writer; report as taken.
                    return Ok(RegistrationOutcome::EmailTaken);
                }

                self.session.set_active_user(Some(&record.email)).await?;
                info!(email = %record.email, "new user registered");
                Ok(RegistrationOutcome::Registered { name: record.name })
            }
            Some(existing) if existing.name != record.name => Ok(RegistrationOutcome::EmailTaken),
            Some(existing) if existing.password != record.password => {
                Ok(RegistrationOutcome::IncorrectPassword)
            }
            Some(existing) => {
                self.session.set_active_user(Some(&existing.email)).await?;
                info!(email = %existing.email, "returning user logged in via registration");
                Ok(RegistrationOutcome::ReturningUser {
                    name: existing.name,
                })
            }
        }
    }
}
