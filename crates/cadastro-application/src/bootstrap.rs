//! Application wiring.
//!
//! Builds the use-case services over one shared store instance. The store is
//! constructed explicitly here and injected into every service; nothing in
//! the application reaches for ambient global state.

use std::path::PathBuf;
use std::sync::Arc;

use cadastro_core::error::Result;
use cadastro_infrastructure::JsonUserStore;

use crate::login_service::LoginService;
use crate::profile_service::ProfileService;
use crate::registration_service::RegistrationService;

/// The wired application: one service per screen, one store behind them.
pub struct CadastroApp {
    pub registration: RegistrationService,
    pub login: LoginService,
    pub profile: ProfileService,
}

impl CadastroApp {
    /// Wires the services over a store in the given directory.
    pub fn open(store_dir: impl Into<PathBuf>) -> Self {
        Self::with_store(Arc::new(JsonUserStore::new(store_dir.into())))
    }

    /// Wires the services over the store at the configured platform location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::with_store(Arc::new(JsonUserStore::open_default()?)))
    }

    fn with_store(store: Arc<JsonUserStore>) -> Self {
        Self {
            registration: RegistrationService::new(store.clone(), store.clone()),
            login: LoginService::new(store.clone(), store.clone()),
            profile: ProfileService::new(store.clone(), store),
        }
    }
}
