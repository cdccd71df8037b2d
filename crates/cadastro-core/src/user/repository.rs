//! User record and session repository traits.
//!
//! These traits define the contract for persisting user records and the
//! active-session pointer, decoupling the form controllers from the specific
//! storage mechanism.

use async_trait::async_trait;

use crate::error::Result;
use crate::user::UserRecord;

/// Result of a create operation.
///
/// Creation never overwrites: inserting an email that is already stored
/// leaves the store untouched and reports [`CreateOutcome::AlreadyExists`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

/// Result of an update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Result of a delete operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

/// An abstract repository for user records.
///
/// `email` is the sole lookup key; matches are case-sensitive, so callers
/// normalize (trim + lowercase) before storing or querying. Every returned
/// record is a detached copy; edits only persist through [`update_user`].
///
/// Implementations treat unreadable or corrupt stored data as empty rather
/// than failing reads; write failures surface as errors.
///
/// [`update_user`]: UserRepository::update_user
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all stored records in storage order.
    async fn list_users(&self) -> Result<Vec<UserRecord>>;

    /// Finds a record by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Inserts a record unless its email is already taken.
    async fn create_user(&self, record: &UserRecord) -> Result<CreateOutcome>;

    /// Replaces the stored record with the same email, wholesale.
    ///
    /// Does not insert when no record matches.
    async fn update_user(&self, record: &UserRecord) -> Result<UpdateOutcome>;

    /// Removes the record with the given email, if present.
    ///
    /// Does not touch the active-session pointer; the caller decides whether
    /// the deletion invalidates it.
    async fn delete_user(&self, email: &str) -> Result<DeleteOutcome>;
}

/// Repository for the single active-session pointer.
///
/// The pointer is a weak reference: it stores only an email string and is
/// resolved against the records on read. A pointer left dangling by a
/// deletion resolves to "no active user" instead of erroring.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Overwrites the session pointer; `None` clears it.
    async fn set_active_user(&self, email: Option<&str>) -> Result<()>;

    /// Returns the raw pointer value without resolving it.
    async fn active_email(&self) -> Result<Option<String>>;

    /// Resolves the pointer to a live record.
    ///
    /// Returns `None` when no pointer is set or when it no longer matches a
    /// stored record.
    async fn active_user(&self) -> Result<Option<UserRecord>>;
}
