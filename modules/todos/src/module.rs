use std::path::Path;
use std::sync::Arc;

use runtime::{AppConfig, StorageBackend};
use tracing::{debug, info};

use crate::config::TodosConfig;
use crate::contract::client::TodosApi;
use crate::domain::service::Service;
use crate::gateways::local::TodosLocalClient;
use crate::infra::storage::{FileStore, KeyValueStore, KvTodosRepository, MemoryStore};

/// Key of this module's entry in the `modules` configuration bag.
pub const MODULE_NAME: &str = "todos";

/// Wired todos module: storage → repository → service → local client.
#[derive(Clone)]
pub struct TodosModule {
    service: Arc<Service>,
    client: Arc<dyn TodosApi>,
    config: TodosConfig,
}

impl TodosModule {
    /// Build the module from application configuration.
    ///
    /// The file backend stores under `storage.dir`, resolved against `home_dir`.
    pub async fn init(app: &AppConfig) -> anyhow::Result<Self> {
        info!("Initializing todos module");

        let cfg: TodosConfig = app.module_config(MODULE_NAME)?;
        debug!(
            "Loaded todos config: storage_key={}, max_title_length={}, max_description_length={}",
            cfg.storage_key, cfg.max_title_length, cfg.max_description_length
        );

        let storage = app.storage.clone().unwrap_or_default();
        let store: Arc<dyn KeyValueStore> = match storage.backend {
            StorageBackend::Memory => {
                info!("Using in-memory to-do storage");
                Arc::new(MemoryStore::new())
            }
            StorageBackend::File => {
                let dir = storage.resolved_dir(Path::new(&app.home_dir));
                info!("Using file to-do storage at {}", dir.display());
                Arc::new(FileStore::open(dir).await?)
            }
        };

        Ok(Self::with_store(store, cfg))
    }

    /// Build the module over an already-constructed store.
    pub fn with_store(store: Arc<dyn KeyValueStore>, config: TodosConfig) -> Self {
        let repo = KvTodosRepository::new(store, config.storage_key.clone());
        let service = Arc::new(Service::new(Arc::new(repo), config.service_config()));
        let client: Arc<dyn TodosApi> = Arc::new(TodosLocalClient::new(service.clone()));

        Self {
            service,
            client,
            config,
        }
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for collaborators.
    pub fn client(&self) -> Arc<dyn TodosApi> {
        self.client.clone()
    }

    pub fn config(&self) -> &TodosConfig {
        &self.config
    }
}
