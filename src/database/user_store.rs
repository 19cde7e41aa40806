use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, to_document, Document};
use mongodb::options::IndexOptions;
use mongodb::IndexModel;

use super::MongoDB;
use crate::models::User;
use crate::utils::AppError;

/// Filter and `$setOnInsert` update that insert `user` only when its email is absent.
pub(crate) fn upsert_by_email(user: &User) -> Result<(Document, Document), AppError> {
    let mut on_insert = to_document(user)?;
    // both come from the filter / the server
    on_insert.remove("_id");
    on_insert.remove("email");

    Ok((
        doc! { "email": &user.email },
        doc! { "$setOnInsert": on_insert },
    ))
}

/// Storage operations the seeder and the read helpers need.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Makes `email` a unique key of the store.
    async fn ensure_email_index(&self) -> Result<(), AppError>;

    /// Inserts `user` unless a record with the same email exists.
    /// Returns `true` when a new record was written. Existing records are left untouched.
    async fn insert_if_absent(&self, user: &User) -> Result<bool, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_all(&self) -> Result<Vec<User>, AppError>;
}

#[async_trait]
impl UserStore for MongoDB {
    async fn ensure_email_index(&self) -> Result<(), AppError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.users().create_index(index).await?;
        log::info!("   ✅ Index ready: users(email) unique");
        Ok(())
    }

    async fn insert_if_absent(&self, user: &User) -> Result<bool, AppError> {
        let (filter, update) = upsert_by_email(user)?;

        let result = self
            .users()
            .update_one(filter, update)
            .upsert(true)
            .await?;

        Ok(result.upserted_id.is_some())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = self.users().find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let cursor = self.users().find(doc! {}).await?;
        let users: Vec<User> = cursor.try_collect().await?;
        Ok(users)
    }
}
