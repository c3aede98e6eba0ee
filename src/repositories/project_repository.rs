use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::{Database, PROJECTS_COLLECTION},
    errors::AppResult,
    models::domain::Project,
};

/// Read-only view of the project store. Projects and their steps are written
/// by the generation flow, never by the quiz or achievement code.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>>;
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Project>>;
}

pub struct MongoProjectRepository {
    collection: Collection<Project>,
}

impl MongoProjectRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(PROJECTS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for projects collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder().name("user_id".to_string()).build())
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(user_index).await?;

        log::info!("Successfully created indexes for projects collection");
        Ok(())
    }
}

#[async_trait]
impl ProjectRepository for MongoProjectRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Project>> {
        let project = self.collection.find_one(doc! { "id": id }).await?;
        Ok(project)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Project>> {
        let projects = self
            .collection
            .find(doc! { "userId": user_id })
            .await?
            .try_collect()
            .await?;
        Ok(projects)
    }
}
