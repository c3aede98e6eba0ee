use std::collections::HashSet;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind},
    options::IndexOptions,
    Collection, IndexModel,
};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::{Database, USER_ACHIEVEMENTS_COLLECTION},
    errors::AppResult,
    models::domain::{EarnedAchievement, UserAchievement},
};

const DUPLICATE_KEY_CODE: i32 = 11000;

/// Append-only store of earned achievements. Records are never updated or
/// removed once written.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AchievementRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<EarnedAchievement>>;

    /// Stores the given achievements and returns the ones actually written.
    /// Achievements the user already holds are skipped, not reported as errors.
    async fn append(
        &self,
        user_id: &str,
        achievements: Vec<EarnedAchievement>,
    ) -> AppResult<Vec<EarnedAchievement>>;
}

pub struct MongoAchievementRepository {
    collection: Collection<UserAchievement>,
}

impl MongoAchievementRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection(USER_ACHIEVEMENTS_COLLECTION);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_achievements collection");

        // One record per (user, achievement): a racing second award fails here.
        let user_achievement_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_achievement_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_achievement_index).await?;

        log::info!("Successfully created indexes for user_achievements collection");
        Ok(())
    }
}

#[async_trait]
impl AchievementRepository for MongoAchievementRepository {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<EarnedAchievement>> {
        let records: Vec<UserAchievement> = self
            .collection
            .find(doc! { "user_id": user_id })
            .sort(doc! { "earned_at": 1 })
            .await?
            .try_collect()
            .await?;
        Ok(records.into_iter().map(|r| r.achievement).collect())
    }

    async fn append(
        &self,
        user_id: &str,
        achievements: Vec<EarnedAchievement>,
    ) -> AppResult<Vec<EarnedAchievement>> {
        if achievements.is_empty() {
            return Ok(achievements);
        }

        let records: Vec<UserAchievement> = achievements
            .into_iter()
            .map(|achievement| UserAchievement {
                user_id: user_id.to_string(),
                achievement,
            })
            .collect();

        let skipped = match self.collection.insert_many(&records).ordered(false).await {
            Ok(_) => HashSet::new(),
            Err(err) => duplicate_key_indexes(&err).ok_or(err)?,
        };

        if !skipped.is_empty() {
            log::warn!(
                "Skipped {} achievement(s) already stored for user {}",
                skipped.len(),
                user_id
            );
        }

        Ok(records
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !skipped.contains(index))
            .map(|(_, record)| record.achievement)
            .collect())
    }
}

/// Positions of the records rejected by the unique index, or `None` when the
/// failure involved anything other than duplicate keys.
fn duplicate_key_indexes(err: &MongoError) -> Option<HashSet<usize>> {
    match err.kind.as_ref() {
        ErrorKind::InsertMany(failure) if failure.write_concern_error.is_none() => {
            let write_errors = failure.write_errors.as_deref().unwrap_or_default();
            only_duplicates(write_errors.iter().map(|e| (e.index, e.code)))
        }
        _ => None,
    }
}

fn only_duplicates(errors: impl Iterator<Item = (usize, i32)>) -> Option<HashSet<usize>> {
    errors
        .map(|(index, code)| (code == DUPLICATE_KEY_CODE).then_some(index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_failures_name_the_skipped_records() {
        let skipped = only_duplicates([(0, 11000), (2, 11000)].into_iter())
            .expect("only duplicates");

        assert_eq!(skipped, HashSet::from([0, 2]));
    }

    #[test]
    fn any_other_write_error_is_not_swallowed() {
        assert!(only_duplicates([(0, 11000), (1, 121)].into_iter()).is_none());
    }
}
