pub mod script;

pub use script::render_init_script;

use crate::config::BootstrapConfig;
use crate::models::InitDocument;
use crate::utils::AppError;
use mongodb::bson::doc;
use mongodb::Client;

#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapReport {
    pub database: String,
    pub user: String,
    pub collection: String,
    pub inserted_id: String,
}

/// First-start initialization: scoped `readWrite` user, scratch collection,
/// one `{name: "Initial Data"}` document.
///
/// Not idempotent. Against an already initialized database `createUser`
/// fails and the error is returned as is.
pub async fn run_bootstrap(client: &Client, config: &BootstrapConfig) -> Result<BootstrapReport, AppError> {
    let db = client.database(&config.database);

    log::info!("🔧 Bootstrapping database {}...", config.database);

    db.run_command(doc! {
        "createUser": &config.user,
        "pwd": &config.password,
        "roles": [
            { "role": "readWrite", "db": &config.database }
        ],
    })
    .await
    .map_err(|e| AppError::BootstrapError(format!("createUser '{}' failed: {}", config.user, e)))?;
    log::info!("   ✅ User created: {} (readWrite on {})", config.user, config.database);

    db.create_collection(&config.collection)
        .await
        .map_err(|e| {
            AppError::BootstrapError(format!("createCollection '{}' failed: {}", config.collection, e))
        })?;
    log::info!("   ✅ Collection created: {}", config.collection);

    let result = db
        .collection::<InitDocument>(&config.collection)
        .insert_one(InitDocument::initial())
        .await
        .map_err(|e| AppError::BootstrapError(format!("insertOne failed: {}", e)))?;

    let inserted_id = match result.inserted_id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => result.inserted_id.to_string(),
    };
    log::info!("   ✅ Initial document inserted: {}", inserted_id);

    Ok(BootstrapReport {
        database: config.database.clone(),
        user: config.user.clone(),
        collection: config.collection.clone(),
        inserted_id,
    })
}
