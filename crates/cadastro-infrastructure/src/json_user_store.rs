//! JSON-file-backed record store.
//!
//! Persists the user records and the active-session pointer as two JSON
//! documents in a store directory, surviving process restarts but scoped to
//! one local machine account.
//!
//! # Failure semantics
//!
//! Reads never fail on bad stored data: a missing, empty, or unparseable
//! document is treated as "nothing stored" (with a warning in the logs), so a
//! corrupted store behaves like an empty one and the next successful write
//! recovers it. Write failures are reported as typed errors.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::task;
use tracing::{debug, warn};

use cadastro_core::error::{CadastroError, Result};
use cadastro_core::user::{
    CreateOutcome, DeleteOutcome, SessionRepository, UpdateOutcome, UserRecord, UserRepository,
};

use crate::config::StoreConfig;
use crate::storage::AtomicJsonFile;

const USERS_FILE: &str = "users.json";
const ACTIVE_USER_FILE: &str = "active_user.json";

/// JSON-file-backed implementation of the record store.
///
/// Construct one explicitly with a directory (tests use a temp dir) or via
/// [`JsonUserStore::open_default`] for the standard platform location. All
/// repository methods hand out detached copies; changes persist only through
/// the trait's mutating operations.
pub struct JsonUserStore {
    dir: PathBuf,
}

impl JsonUserStore {
    /// Creates a store over the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Opens the store at the configured location, or the platform default.
    pub fn open_default() -> Result<Self> {
        let dir = StoreConfig::load()
            .resolved_store_dir()
            .map_err(|e| CadastroError::config(e.to_string()))?;
        Ok(Self::new(dir))
    }

    fn users_file(&self) -> AtomicJsonFile<Vec<UserRecord>> {
        AtomicJsonFile::new(self.dir.join(USERS_FILE))
    }

    fn active_file(&self) -> AtomicJsonFile<String> {
        AtomicJsonFile::new(self.dir.join(ACTIVE_USER_FILE))
    }

    /// Loads all records, collapsing unreadable data to an empty list.
    fn load_users_sync(file: &AtomicJsonFile<Vec<UserRecord>>) -> Vec<UserRecord> {
        match file.load() {
            Ok(Some(users)) => users,
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(error = %err, "unreadable user store, treating as empty");
                Vec::new()
            }
        }
    }

    /// Loads the session pointer, collapsing unreadable data to none.
    fn load_active_sync(file: &AtomicJsonFile<String>) -> Option<String> {
        match file.load() {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "unreadable session pointer, treating as unset");
                None
            }
        }
    }

    fn create_sync(
        file: &AtomicJsonFile<Vec<UserRecord>>,
        record: UserRecord,
    ) -> Result<CreateOutcome> {
        let _lock = file.lock()?;
        let mut users = Self::load_users_sync(file);

        if users.iter().any(|u| u.email == record.email) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        debug!(email = %record.email, "creating user record");
        users.push(record);
        file.save(&users)?;
        Ok(CreateOutcome::Created)
    }

    fn update_sync(
        file: &AtomicJsonFile<Vec<UserRecord>>,
        record: UserRecord,
    ) -> Result<UpdateOutcome> {
        let _lock = file.lock()?;
        let mut users = Self::load_users_sync(file);

        let Some(slot) = users.iter_mut().find(|u| u.email == record.email) else {
            return Ok(UpdateOutcome::NotFound);
        };

        debug!(email = %record.email, "updating user record");
        *slot = record;
        file.save(&users)?;
        Ok(UpdateOutcome::Updated)
    }

    fn delete_sync(file: &AtomicJsonFile<Vec<UserRecord>>, email: &str) -> Result<DeleteOutcome> {
        let _lock = file.lock()?;
        let mut users = Self::load_users_sync(file);

        let before = users.len();
        users.retain(|u| u.email != email);
        if users.len() == before {
            return Ok(DeleteOutcome::NotFound);
        }

        debug!(email = %email, "deleting user record");
        file.save(&users)?;
        Ok(DeleteOutcome::Deleted)
    }
}

#[async_trait]
impl UserRepository for JsonUserStore {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        let file = self.users_file();

        task::spawn_blocking(move || Ok(Self::load_users_sync(&file)))
            .await
            .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>> {
        let file = self.users_file();
        let email = email.to_string();

        task::spawn_blocking(move || {
            Ok(Self::load_users_sync(&file)
                .into_iter()
                .find(|u| u.email == email))
        })
        .await
        .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn create_user(&self, record: &UserRecord) -> Result<CreateOutcome> {
        let file = self.users_file();
        let record = record.clone();

        task::spawn_blocking(move || Self::create_sync(&file, record))
            .await
            .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn update_user(&self, record: &UserRecord) -> Result<UpdateOutcome> {
        let file = self.users_file();
        let record = record.clone();

        task::spawn_blocking(move || Self::update_sync(&file, record))
            .await
            .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn delete_user(&self, email: &str) -> Result<DeleteOutcome> {
        let file = self.users_file();
        let email = email.to_string();

        task::spawn_blocking(move || Self::delete_sync(&file, &email))
            .await
            .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }
}

#[async_trait]
impl SessionRepository for JsonUserStore {
    async fn set_active_user(&self, email: Option<&str>) -> Result<()> {
        let file = self.active_file();
        let email = email.map(str::to_string);

        task::spawn_blocking(move || match email {
            Some(email) => {
                debug!(email = %email, "setting active user");
                file.save(&email).map_err(Into::into)
            }
            None => {
                debug!("clearing active user");
                file.remove().map_err(Into::into)
            }
        })
        .await
        .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn active_email(&self) -> Result<Option<String>> {
        let file = self.active_file();

        task::spawn_blocking(move || Ok(Self::load_active_sync(&file)))
            .await
            .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn active_user(&self) -> Result<Option<UserRecord>> {
        let active_file = self.active_file();
        let users_file = self.users_file();

        task::spawn_blocking(move || {
            // The pointer is a weak reference; a dangling one resolves to no
            // active user rather than erroring.
            let Some(email) = Self::load_active_sync(&active_file) else {
                return Ok(None);
            };
            Ok(Self::load_users_sync(&users_file)
                .into_iter()
                .find(|u| u.email == email))
        })
        .await
        .map_err(|e| CadastroError::io(format!("Failed to spawn blocking task: {}", e)))?
    }
}
