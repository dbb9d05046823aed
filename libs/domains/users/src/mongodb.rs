//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use mongodb::{Collection, Database, bson::doc};
use tracing::instrument;

use crate::error::{UserError, UserResult, messages};
use crate::models::{RemoveResult, User};
use crate::repository::UserRepository;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let repo = MongoUserRepository::new(client.database("test_mocha_db"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self::with_collection(db, USERS_COLLECTION)
    }

    /// Create a new MongoUserRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<User>(collection_name);
        Self { collection }
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> UserResult<Option<User>> {
        let user = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn insert(&self, user: User) -> UserResult<User> {
        self.collection.insert_one(&user).await?;

        tracing::info!("User created successfully");
        Ok(user)
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn save(&self, user: User) -> UserResult<User> {
        let result = self
            .collection
            .replace_one(doc! { "_id": user.id.as_str() }, &user)
            .await?;

        if result.matched_count == 0 {
            return Err(UserError::NotFound(messages::USER_NOT_FOUND.to_string()));
        }

        tracing::info!("User updated successfully");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn remove_by_id(&self, id: &str) -> UserResult<RemoveResult> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        tracing::info!(deleted_count = result.deleted_count, "User removal finished");
        Ok(RemoveResult {
            deleted_count: result.deleted_count,
        })
    }
}
