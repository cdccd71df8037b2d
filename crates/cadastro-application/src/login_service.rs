//! Login use case.
//!
//! Standalone variant of the returning-user path: a narrow pre-check on the
//! two credentials, a lookup, a password comparison, and the session switch.

use std::sync::Arc;

use tracing::info;

use cadastro_core::error::Result;
use cadastro_core::schema::{self, ValidationErrors};
use cadastro_core::user::{SessionRepository, UserRepository};

use crate::feedback::{Feedback, Redirect};

/// Terminal outcome of one login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Credentials matched; the session now points at this user.
    LoggedIn { name: String },
    /// No record is stored under the given email.
    UserNotFound,
    /// The record exists but the password did not match.
    IncorrectPassword,
    /// The credentials failed the form's pre-check.
    Invalid(ValidationErrors),
}

impl LoginOutcome {
    /// The feedback message to show, if the outcome carries one.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::LoggedIn { name } => {
                Some(Feedback::success(format!("Bem-vindo(a) de volta, {name}!")))
            }
            Self::UserNotFound => Some(Feedback::error("Usuário não encontrado.")),
            Self::IncorrectPassword => Some(Feedback::error("Senha incorreta.")),
            Self::Invalid(_) => None,
        }
    }

    /// Where to navigate after this outcome, if anywhere.
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::LoggedIn { .. } => Some(Redirect::to_welcome()),
            _ => None,
        }
    }
}

/// Use case for the login screen.
pub struct LoginService {
    users: Arc<dyn UserRepository>,
    session: Arc<dyn SessionRepository>,
}

impl LoginService {
    /// Creates a new `LoginService` over the given repositories.
    pub fn new(users: Arc<dyn UserRepository>, session: Arc<dyn SessionRepository>) -> Self {
        Self { users, session }
    }

    /// Handles one submission of the login form.
    ///
    /// The email is trimmed and lowercased before lookup; the password is
    /// compared verbatim against the stored one.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let email = email.trim().to_lowercase();

        if let Err(errors) = schema::validate_login(&email, password) {
            return Ok(LoginOutcome::Invalid(errors));
        }

        let Some(user) = self.users.find_by_email(&email).await? else {
            return Ok(LoginOutcome::UserNotFound);
        };

        if user.password != password {
            return Ok(LoginOutcome::IncorrectPassword);
        }

        self.session.set_active_user(Some(&user.email)).await?;
        info!(email = %user.email, "user logged in");
        Ok(LoginOutcome::LoggedIn { name: user.name })
    }
}
