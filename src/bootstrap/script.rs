use crate::config::BootstrapConfig;
use crate::models::INITIAL_DATA_NAME;

/// Renders the bootstrap as a `mongo-init.js` for the engine's
/// `docker-entrypoint-initdb.d` hook.
pub fn render_init_script(config: &BootstrapConfig) -> String {
    let database = js_string(&config.database);
    let collection = js_string(&config.collection);

    format!(
        "// mongo-init.js\n\
         db = db.getSiblingDB({database});\n\
         \n\
         db.createUser({{\n\
         \x20 user: {user},\n\
         \x20 pwd: {pwd},\n\
         \x20 roles: [\n\
         \x20   {{ role: 'readWrite', db: {database} }}\n\
         \x20 ]\n\
         }});\n\
         \n\
         db.createCollection({collection});\n\
         db.getCollection({collection}).insertOne({{ name: {name} }});\n",
        database = database,
        user = js_string(&config.user),
        pwd = js_string(&config.password),
        collection = collection,
        name = js_string(INITIAL_DATA_NAME),
    )
}

// JSON string literals are valid JS string literals
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
