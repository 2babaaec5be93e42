use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::ActivityResult};

/// Append-only store of play records. Inserts are atomic and independent;
/// repeated plays of the same student+game+activity are separate documents,
/// never upserted or merged.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActivityResultRepository: Send + Sync {
    async fn append(&self, record: ActivityResult) -> AppResult<ActivityResult>;
    async fn find_all(&self) -> AppResult<Vec<ActivityResult>>;
    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<ActivityResult>>;
    async fn find_by_game(&self, game_id: &str) -> AppResult<Vec<ActivityResult>>;
    async fn find_by_student_and_game(
        &self,
        student_id: &str,
        game_id: &str,
    ) -> AppResult<Vec<ActivityResult>>;
}

pub struct MongoActivityResultRepository {
    collection: Collection<ActivityResult>,
}

impl MongoActivityResultRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for activity results collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let student_index = IndexModel::builder()
            .keys(doc! { "student_id": 1 })
            .options(IndexOptions::builder().name("student_id".to_string()).build())
            .build();

        let student_game_index = IndexModel::builder()
            .keys(doc! { "student_id": 1, "game_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("student_game".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(student_index).await?;
        self.collection.create_index(student_game_index).await?;

        log::info!("Successfully created indexes for activity results collection");
        Ok(())
    }
}

#[async_trait]
impl ActivityResultRepository for MongoActivityResultRepository {
    async fn append(&self, record: ActivityResult) -> AppResult<ActivityResult> {
        self.collection.insert_one(&record).await?;
        Ok(record)
    }

    async fn find_all(&self) -> AppResult<Vec<ActivityResult>> {
        let records = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    async fn find_by_student(&self, student_id: &str) -> AppResult<Vec<ActivityResult>> {
        let records = self
            .collection
            .find(doc! { "student_id": student_id })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    async fn find_by_game(&self, game_id: &str) -> AppResult<Vec<ActivityResult>> {
        let records = self
            .collection
            .find(doc! { "game_id": game_id })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }

    async fn find_by_student_and_game(
        &self,
        student_id: &str,
        game_id: &str,
    ) -> AppResult<Vec<ActivityResult>> {
        let records = self
            .collection
            .find(doc! {
                "student_id": student_id,
                "game_id": game_id
            })
            .await?
            .try_collect()
            .await?;
        Ok(records)
    }
}
