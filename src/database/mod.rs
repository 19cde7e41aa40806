pub mod user_store;

#[cfg(test)]
pub mod memory;

pub use user_store::UserStore;

use crate::config::DatabaseConfig;
use crate::models::User;
use crate::utils::AppError;
use mongodb::{options::ClientOptions, Client, Collection, Database};

pub const USERS_COLLECTION: &str = "users";

/// Explicitly owned MongoDB handle. Built once per command, passed by
/// reference, and released with [`MongoDB::shutdown`].
#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;

        client_options.app_name = Some("user-seeder".to_string());
        client_options.max_pool_size = Some(config.max_pool_size);
        client_options.connect_timeout = Some(config.connect_timeout);
        client_options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;
        let db = client.database(&config.name);

        // Test connection
        db.list_collection_names()
            .await
            .map_err(|e| AppError::ConnectionError(e.to_string()))?;

        log::info!("✅ Connected to MongoDB database: {}", config.name);

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn users(&self) -> Collection<User> {
        self.collection(USERS_COLLECTION)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Closes the connection pool. Consumes the handle.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        log::debug!("🔌 MongoDB connection closed");
    }
}
