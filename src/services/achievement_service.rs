use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    constants::achievements::{find_achievement, ACHIEVEMENTS},
    errors::AppResult,
    models::{
        domain::{AchievementDefinition, EarnedAchievement, EarnedRef, Project, UserStats},
        dto::response::{AchievementCheckResponse, AchievementOverview, AchievementProgress},
    },
    repositories::{AchievementRepository, ProjectRepository},
};

pub const POINTS_PER_LEVEL: u32 = 100;

/// Catalog entries met by `stats`/`projects` that are not in `already_earned`,
/// in catalog order.
pub fn check_user_achievements(
    stats: &UserStats,
    projects: &[Project],
    already_earned: &[EarnedRef],
) -> Vec<EarnedAchievement> {
    check_user_achievements_at(stats, projects, already_earned, Utc::now())
}

pub fn check_user_achievements_at(
    stats: &UserStats,
    projects: &[Project],
    already_earned: &[EarnedRef],
    now: DateTime<Utc>,
) -> Vec<EarnedAchievement> {
    let earned_ids: HashSet<&str> = already_earned.iter().flat_map(EarnedRef::keys).collect();

    ACHIEVEMENTS
        .iter()
        .filter(|a| !earned_ids.contains(a.id))
        .filter(|a| a.is_met(stats, projects))
        .map(|a| a.award(now))
        .collect()
}

/// Percent progress toward one achievement, within 0-100.
pub fn get_achievement_progress(
    achievement: &AchievementDefinition,
    stats: &UserStats,
    projects: &[Project],
) -> u32 {
    achievement.progress(stats, projects)
}

/// Progress by achievement id; ids outside the catalog report 0.
pub fn achievement_progress_by_id(id: &str, stats: &UserStats, projects: &[Project]) -> u32 {
    find_achievement(id)
        .map(|a| get_achievement_progress(a, stats, projects))
        .unwrap_or(0)
}

pub fn level_for_points(total_points: u32) -> u32 {
    total_points / POINTS_PER_LEVEL + 1
}

fn sum_points(achievements: &[EarnedAchievement]) -> u32 {
    achievements.iter().map(|a| a.points).sum()
}

pub struct AchievementService {
    project_repository: Arc<dyn ProjectRepository>,
    achievement_repository: Arc<dyn AchievementRepository>,
}

impl AchievementService {
    pub fn new(
        project_repository: Arc<dyn ProjectRepository>,
        achievement_repository: Arc<dyn AchievementRepository>,
    ) -> Self {
        Self {
            project_repository,
            achievement_repository,
        }
    }

    async fn load_projects_and_stats(&self, user_id: &str) -> AppResult<(Vec<Project>, UserStats)> {
        let projects = self.project_repository.find_by_user(user_id).await?;
        let stats = UserStats::from_projects(&projects, Utc::now().date_naive());
        Ok((projects, stats))
    }

    pub async fn user_stats(&self, user_id: &str) -> AppResult<UserStats> {
        let (_, stats) = self.load_projects_and_stats(user_id).await?;
        Ok(stats)
    }

    /// Evaluates the catalog for a user and appends whatever is newly earned.
    /// An overlapping check may store some of the same achievements first;
    /// those are left out of `newly_earned`.
    pub async fn check_and_award(&self, user_id: &str) -> AppResult<AchievementCheckResponse> {
        let (projects, stats) = self.load_projects_and_stats(user_id).await?;
        let earned = self.achievement_repository.find_by_user(user_id).await?;
        let earned_refs: Vec<EarnedRef> = earned.iter().map(EarnedRef::from).collect();

        let candidates = check_user_achievements(&stats, &projects, &earned_refs);
        if candidates.is_empty() {
            let total_points = sum_points(&earned);
            return Ok(AchievementCheckResponse {
                newly_earned: candidates,
                total_points,
                level: level_for_points(total_points),
            });
        }

        let candidate_count = candidates.len();
        let newly_earned = self
            .achievement_repository
            .append(user_id, candidates)
            .await?;

        if !newly_earned.is_empty() {
            log::info!(
                "User {} earned {} achievement(s): {}",
                user_id,
                newly_earned.len(),
                newly_earned
                    .iter()
                    .map(|a| a.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let total_points = if newly_earned.len() == candidate_count {
            sum_points(&earned) + sum_points(&newly_earned)
        } else {
            let stored = self.achievement_repository.find_by_user(user_id).await?;
            sum_points(&stored)
        };

        Ok(AchievementCheckResponse {
            newly_earned,
            total_points,
            level: level_for_points(total_points),
        })
    }

    /// Progress toward one achievement; earned ones report 100 and ids outside
    /// the catalog report 0.
    pub async fn progress_for(&self, user_id: &str, achievement_id: &str) -> AppResult<u32> {
        let earned = self.achievement_repository.find_by_user(user_id).await?;
        if earned.iter().any(|e| e.id == achievement_id) {
            return Ok(100);
        }

        let (projects, stats) = self.load_projects_and_stats(user_id).await?;
        Ok(achievement_progress_by_id(achievement_id, &stats, &projects))
    }

    /// Every catalog entry with its earned state and progress.
    pub async fn overview(&self, user_id: &str) -> AppResult<AchievementOverview> {
        let (projects, stats) = self.load_projects_and_stats(user_id).await?;
        let earned = self.achievement_repository.find_by_user(user_id).await?;

        let achievements: Vec<AchievementProgress> = ACHIEVEMENTS
            .iter()
            .map(|definition| {
                let record = earned.iter().find(|e| e.id == definition.id);
                AchievementProgress {
                    achievement: definition.into(),
                    earned: record.is_some(),
                    earned_at: record.map(|r| r.earned_at),
                    progress: match record {
                        Some(_) => 100,
                        None => get_achievement_progress(definition, &stats, &projects),
                    },
                }
            })
            .collect();

        let total_points = sum_points(&earned);

        Ok(AchievementOverview {
            earned_count: earned.len() as u32,
            total_points,
            level: level_for_points(total_points),
            achievements,
        })
    }
}
