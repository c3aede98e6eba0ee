use std::collections::HashSet;

use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::{project::Project, user_stats::UserStats};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Enum, Copy)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Milestone,
    Skill,
    Time,
    Streak,
    Quality,
}

/// A quantity read off the stats rollup or the project list.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Metric {
    TotalProjects,
    CompletedProjects,
    DistinctTechnologies,
    TotalTimeSpent,
    CurrentStreak,
    DistinctCompletedDifficulties,
}

impl Metric {
    pub fn measure(self, stats: &UserStats, projects: &[Project]) -> u32 {
        match self {
            Metric::TotalProjects => projects.len() as u32,
            Metric::CompletedProjects => stats.completed_projects,
            Metric::DistinctTechnologies => projects
                .iter()
                .flat_map(|p| p.technologies.iter())
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect::<HashSet<_>>()
                .len() as u32,
            Metric::TotalTimeSpent => stats.total_time_spent,
            Metric::CurrentStreak => stats.current_streak,
            Metric::DistinctCompletedDifficulties => projects
                .iter()
                .filter(|p| p.is_completed())
                .map(|p| p.difficulty)
                .collect::<HashSet<_>>()
                .len() as u32,
        }
    }
}

pub type AchievementPredicate = fn(&UserStats, &[Project]) -> bool;

#[derive(Clone, Copy)]
pub enum Criterion {
    /// Met once `metric` reaches `minimum`.
    Threshold { metric: Metric, minimum: u32 },
    /// Structural rules that inspect the project list directly.
    Predicate(AchievementPredicate),
}

impl std::fmt::Debug for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criterion::Threshold { metric, minimum } => f
                .debug_struct("Threshold")
                .field("metric", metric)
                .field("minimum", minimum)
                .finish(),
            Criterion::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct AchievementDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon_name: &'static str,
    pub points: u32,
    pub category: AchievementCategory,
    pub criterion: Criterion,
}

impl AchievementDefinition {
    pub fn is_met(&self, stats: &UserStats, projects: &[Project]) -> bool {
        match self.criterion {
            Criterion::Threshold { metric, minimum } => metric.measure(stats, projects) >= minimum,
            Criterion::Predicate(check) => check(stats, projects),
        }
    }

    /// Percent progress, always within 0-100. Predicates report 0 or 100.
    pub fn progress(&self, stats: &UserStats, projects: &[Project]) -> u32 {
        match self.criterion {
            Criterion::Threshold { metric, minimum } => {
                if minimum == 0 {
                    return 100;
                }
                let value = u64::from(metric.measure(stats, projects));
                (value * 100 / u64::from(minimum)).min(100) as u32
            }
            Criterion::Predicate(check) => {
                if check(stats, projects) {
                    100
                } else {
                    0
                }
            }
        }
    }

    pub fn award(&self, earned_at: DateTime<Utc>) -> EarnedAchievement {
        EarnedAchievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon_name: self.icon_name.to_string(),
            points: self.points,
            category: self.category,
            earned_at,
        }
    }
}

/// Write-once record of an unlocked achievement.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct EarnedAchievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon_name: String,
    pub points: u32,
    pub category: AchievementCategory,
    pub earned_at: DateTime<Utc>,
}

/// Reference to an already-earned achievement. Older records carry the id
/// under `achievementId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EarnedRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "achievementId",
        skip_serializing_if = "Option::is_none"
    )]
    pub achievement_id: Option<String>,
}

impl EarnedRef {
    pub fn new(id: &str) -> Self {
        EarnedRef {
            id: Some(id.to_string()),
            achievement_id: None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.id
            .as_deref()
            .into_iter()
            .chain(self.achievement_id.as_deref())
    }
}

impl From<&EarnedAchievement> for EarnedRef {
    fn from(earned: &EarnedAchievement) -> Self {
        EarnedRef::new(&earned.id)
    }
}

/// Storage shape: one document per earned achievement.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserAchievement {
    pub user_id: String,
    #[serde(flatten)]
    pub achievement: EarnedAchievement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earned_ref_reads_current_and_legacy_keys() {
        let current: EarnedRef = serde_json::from_str(r#"{"id": "first_project"}"#).unwrap();
        let legacy: EarnedRef =
            serde_json::from_str(r#"{"achievementId": "tech_explorer"}"#).unwrap();

        assert_eq!(current.keys().collect::<Vec<_>>(), vec!["first_project"]);
        assert_eq!(legacy.keys().collect::<Vec<_>>(), vec!["tech_explorer"]);
    }

    #[test]
    fn threshold_progress_is_clamped() {
        let definition = AchievementDefinition {
            id: "streak",
            title: "Streak",
            description: "Keep going",
            icon_name: "flame",
            points: 10,
            category: AchievementCategory::Streak,
            criterion: Criterion::Threshold {
                metric: Metric::CurrentStreak,
                minimum: 4,
            },
        };

        let mut stats = UserStats {
            current_streak: 1,
            ..UserStats::default()
        };
        assert_eq!(definition.progress(&stats, &[]), 25);
        assert!(!definition.is_met(&stats, &[]));

        stats.current_streak = 9;
        assert_eq!(definition.progress(&stats, &[]), 100);
        assert!(definition.is_met(&stats, &[]));
    }
}
