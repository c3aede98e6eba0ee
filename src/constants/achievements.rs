use std::collections::HashSet;

use chrono::Duration;
use once_cell::sync::Lazy;

use crate::models::domain::achievement::{
    AchievementCategory, AchievementDefinition, Criterion, Metric,
};
use crate::models::domain::{Project, UserStats};

pub const SPEED_RUN_MAX_MINUTES: u32 = 120;
pub const MARATHON_MIN_MINUTES: u32 = 600;
pub const EARLY_BIRD_MAX_HOURS: i64 = 24;
pub const PERFECTIONIST_MIN_COMPLETED: u32 = 5;

static FRONTEND_TECHNOLOGIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "react", "vue", "angular", "svelte", "html", "css", "javascript", "typescript",
        "tailwind", "next.js", "nextjs",
    ]
    .into_iter()
    .collect()
});

static BACKEND_TECHNOLOGIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node.js", "nodejs", "express", "python", "django", "flask", "java", "spring", "rust",
        "go", "postgresql", "mongodb", "mysql", "firebase",
    ]
    .into_iter()
    .collect()
});

fn uses_any(project: &Project, technologies: &HashSet<&'static str>) -> bool {
    project
        .technologies
        .iter()
        .any(|t| technologies.contains(t.trim().to_lowercase().as_str()))
}

fn is_full_stack(_stats: &UserStats, projects: &[Project]) -> bool {
    projects.iter().any(|p| uses_any(p, &FRONTEND_TECHNOLOGIES))
        && projects.iter().any(|p| uses_any(p, &BACKEND_TECHNOLOGIES))
}

fn is_speed_runner(_stats: &UserStats, projects: &[Project]) -> bool {
    projects
        .iter()
        .any(|p| p.is_completed() && p.time_spent < SPEED_RUN_MAX_MINUTES)
}

fn is_marathon_runner(_stats: &UserStats, projects: &[Project]) -> bool {
    projects.iter().any(|p| p.time_spent > MARATHON_MIN_MINUTES)
}

fn is_early_bird(_stats: &UserStats, projects: &[Project]) -> bool {
    projects
        .iter()
        .any(|p| p.is_completed() && p.elapsed() <= Duration::hours(EARLY_BIRD_MAX_HOURS))
}

// Exactly 100, not "at least".
fn is_perfectionist(stats: &UserStats, _projects: &[Project]) -> bool {
    stats.completed_projects >= PERFECTIONIST_MIN_COMPLETED && stats.completion_rate == 100.0
}

/// Evaluated in this order; newly earned achievements are reported in it too.
pub static ACHIEVEMENTS: [AchievementDefinition; 16] = [
    AchievementDefinition {
        id: "first_project",
        title: "Getting Started",
        description: "Create your first project",
        icon_name: "rocket",
        points: 10,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::TotalProjects,
            minimum: 1,
        },
    },
    AchievementDefinition {
        id: "first_completion",
        title: "Finisher",
        description: "Complete your first project",
        icon_name: "check-circle",
        points: 25,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::CompletedProjects,
            minimum: 1,
        },
    },
    AchievementDefinition {
        id: "project_streak_3",
        title: "On a Roll",
        description: "Complete 3 projects",
        icon_name: "trending-up",
        points: 50,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::CompletedProjects,
            minimum: 3,
        },
    },
    AchievementDefinition {
        id: "project_streak_5",
        title: "Builder",
        description: "Complete 5 projects",
        icon_name: "hammer",
        points: 75,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::CompletedProjects,
            minimum: 5,
        },
    },
    AchievementDefinition {
        id: "project_streak_10",
        title: "Dedicated Maker",
        description: "Complete 10 projects",
        icon_name: "award",
        points: 150,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::CompletedProjects,
            minimum: 10,
        },
    },
    AchievementDefinition {
        id: "project_master",
        title: "Project Master",
        description: "Complete 25 projects",
        icon_name: "crown",
        points: 300,
        category: AchievementCategory::Milestone,
        criterion: Criterion::Threshold {
            metric: Metric::CompletedProjects,
            minimum: 25,
        },
    },
    AchievementDefinition {
        id: "tech_explorer",
        title: "Tech Explorer",
        description: "Use 5 different technologies across your projects",
        icon_name: "compass",
        points: 50,
        category: AchievementCategory::Skill,
        criterion: Criterion::Threshold {
            metric: Metric::DistinctTechnologies,
            minimum: 5,
        },
    },
    AchievementDefinition {
        id: "full_stack",
        title: "Full Stack",
        description: "Work with both frontend and backend technologies",
        icon_name: "layers",
        points: 75,
        category: AchievementCategory::Skill,
        criterion: Criterion::Predicate(is_full_stack),
    },
    AchievementDefinition {
        id: "speed_runner",
        title: "Speed Runner",
        description: "Complete a project in under 2 hours",
        icon_name: "zap",
        points: 40,
        category: AchievementCategory::Time,
        criterion: Criterion::Predicate(is_speed_runner),
    },
    AchievementDefinition {
        id: "marathon_runner",
        title: "Marathon Runner",
        description: "Spend more than 10 hours on a single project",
        icon_name: "clock",
        points: 60,
        category: AchievementCategory::Time,
        criterion: Criterion::Predicate(is_marathon_runner),
    },
    AchievementDefinition {
        id: "time_master",
        title: "Time Master",
        description: "Spend 50 hours building projects",
        icon_name: "hourglass",
        points: 100,
        category: AchievementCategory::Time,
        criterion: Criterion::Threshold {
            metric: Metric::TotalTimeSpent,
            minimum: 3000,
        },
    },
    AchievementDefinition {
        id: "early_bird",
        title: "Early Bird",
        description: "Complete a project within 24 hours of starting it",
        icon_name: "sunrise",
        points: 30,
        category: AchievementCategory::Time,
        criterion: Criterion::Predicate(is_early_bird),
    },
    AchievementDefinition {
        id: "week_warrior",
        title: "Week Warrior",
        description: "Keep a 7-day activity streak",
        icon_name: "flame",
        points: 70,
        category: AchievementCategory::Streak,
        criterion: Criterion::Threshold {
            metric: Metric::CurrentStreak,
            minimum: 7,
        },
    },
    AchievementDefinition {
        id: "monthly_master",
        title: "Monthly Master",
        description: "Keep a 30-day activity streak",
        icon_name: "calendar",
        points: 250,
        category: AchievementCategory::Streak,
        criterion: Criterion::Threshold {
            metric: Metric::CurrentStreak,
            minimum: 30,
        },
    },
    AchievementDefinition {
        id: "perfectionist",
        title: "Perfectionist",
        description: "Complete 5 projects without leaving any unfinished",
        icon_name: "star",
        points: 120,
        category: AchievementCategory::Quality,
        criterion: Criterion::Predicate(is_perfectionist),
    },
    AchievementDefinition {
        id: "variety_seeker",
        title: "Variety Seeker",
        description: "Complete projects at 3 different difficulty levels",
        icon_name: "shuffle",
        points: 60,
        category: AchievementCategory::Quality,
        criterion: Criterion::Threshold {
            metric: Metric::DistinctCompletedDifficulties,
            minimum: 3,
        },
    },
];

pub fn find_achievement(id: &str) -> Option<&'static AchievementDefinition> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn catalog_points_are_positive() {
        assert!(ACHIEVEMENTS.iter().all(|a| a.points > 0));
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(
            find_achievement("perfectionist").map(|a| a.title),
            Some("Perfectionist")
        );
        assert!(find_achievement("nope").is_none());
    }
}
