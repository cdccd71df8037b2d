//! Profile editing and roster use case.
//!
//! The edit screen loads the active user as initial values, re-validates the
//! merged record through the same schema as registration, and writes it back
//! wholesale. The write is gated behind an explicit confirmation:
//! [`ProfileService::prepare_update`] only validates and returns a pending
//! handle; nothing reaches the store until
//! [`ProfileService::commit_update`] is called with it.

use std::sync::Arc;

use tracing::info;

use cadastro_core::error::Result;
use cadastro_core::schema::{self, ValidationErrors};
use cadastro_core::user::{
    DeleteOutcome, SessionRepository, UpdateOutcome, UserDraft, UserRecord, UserRepository,
};

use crate::feedback::{Feedback, Redirect};

/// A validated profile update awaiting the user's confirmation.
///
/// Holds the fully merged record; dropping it abandons the edit.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingUpdate {
    record: UserRecord,
}

impl PendingUpdate {
    /// The record that will be written on commit, for confirmation display.
    pub fn record(&self) -> &UserRecord {
        &self.record
    }
}

/// Outcome of preparing a profile update.
#[derive(Debug, Clone, PartialEq)]
pub enum PrepareOutcome {
    /// The merged record is valid; commit it to persist.
    Ready(PendingUpdate),
    /// The merged record failed validation; nothing was written.
    Invalid(ValidationErrors),
    /// No active user to edit.
    NoActiveUser,
}

/// Outcome of committing a profile update.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileOutcome {
    /// The stored record was replaced and the session refreshed.
    Saved { name: String },
    /// No stored record matched the update's email; nothing was written.
    NotFound,
}

impl ProfileOutcome {
    /// The feedback message to show, if the outcome carries one.
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            Self::Saved { .. } => Some(Feedback::success("Perfil atualizado com sucesso!")),
            Self::NotFound => None,
        }
    }

    /// Where to navigate after this outcome, if anywhere.
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            Self::Saved { .. } => Some(Redirect::to_roster()),
            Self::NotFound => None,
        }
    }
}

/// Use case for the profile-edit and listing screens.
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
    session: Arc<dyn SessionRepository>,
}

impl ProfileService {
    /// Creates a new `ProfileService` over the given repositories.
    pub fn new(users: Arc<dyn UserRepository>, session: Arc<dyn SessionRepository>) -> Self {
        Self { users, session }
    }

    /// Initial field values for the edit form: the active user's record as a
    /// draft, or `None` when nobody is logged in.
    pub async fn edit_draft(&self) -> Result<Option<UserDraft>> {
        Ok(self
            .session
            .active_user()
            .await?
            .map(|record| UserDraft::from_record(&record)))
    }

    /// Validates an edited draft merged over the active user's record.
    ///
    /// Fields the edit form does not resubmit (the record id and the terms
    /// acceptance) are carried over from the stored record before validation.
    pub async fn prepare_update(&self, mut draft: UserDraft) -> Result<PrepareOutcome> {
        let Some(existing) = self.session.active_user().await? else {
            return Ok(PrepareOutcome::NoActiveUser);
        };

        draft.name = draft.name.trim().to_string();
        draft.email = draft.email.trim().to_lowercase();
        draft.id = Some(existing.id.clone());
        draft.accept_terms = existing.accept_terms;

        match schema::validate(&draft) {
            Ok(record) => Ok(PrepareOutcome::Ready(PendingUpdate { record })),
            Err(errors) => Ok(PrepareOutcome::Invalid(errors)),
        }
    }

    /// Writes a confirmed update to the store and refreshes the session.
    ///
    /// An update whose email no longer matches any stored record (including
    /// an edit that changed the email itself) is reported as `NotFound` and
    /// writes nothing.
    pub async fn commit_update(&self, pending: PendingUpdate) -> Result<ProfileOutcome> {
        let record = pending.record;

        match self.users.update_user(&record).await? {
            UpdateOutcome::Updated => {
                self.session.set_active_user(Some(&record.email)).await?;
                info!(email = %record.email, "profile updated");
                Ok(ProfileOutcome::Saved { name: record.name })
            }
            UpdateOutcome::NotFound => Ok(ProfileOutcome::NotFound),
        }
    }

    /// All stored registrations, for the listing screen.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.users.list_users().await
    }

    /// Points the session at the given registration so the edit screen can
    /// load it.
    pub async fn open_profile(&self, email: &str) -> Result<()> {
        self.session.set_active_user(Some(email)).await
    }

    /// The currently logged-in user, if any.
    pub async fn active_user(&self) -> Result<Option<UserRecord>> {
        self.session.active_user().await
    }

    /// Deletes a registration, clearing the session only when it pointed at
    /// the deleted email.
    pub async fn delete_account(&self, email: &str) -> Result<DeleteOutcome> {
        let outcome = self.users.delete_user(email).await?;

        if outcome == DeleteOutcome::Deleted {
            info!(email = %email, "account deleted");
            if self.session.active_email().await?.as_deref() == Some(email) {
                self.session.set_active_user(None).await?;
            }
        }

        Ok(outcome)
    }

    /// Clears the active session.
    pub async fn logout(&self) -> Result<()> {
        self.session.set_active_user(None).await
    }
}
