use std::collections::HashSet;

use async_graphql::SimpleObject;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::domain::project::Project;

/// Rolled-up numbers the achievement rules read.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize, SimpleObject)]
pub struct UserStats {
    pub total_projects: u32,
    pub completed_projects: u32,
    pub total_time_spent: u32, // minutes
    pub current_streak: u32,   // days
    pub completion_rate: f64,  // 0-100
}

impl UserStats {
    /// Rolls up a user's projects. `today` anchors the activity streak, which
    /// may end today or yesterday.
    pub fn from_projects(projects: &[Project], today: NaiveDate) -> Self {
        let total_projects = projects.len() as u32;
        let completed_projects = projects.iter().filter(|p| p.is_completed()).count() as u32;
        let total_time_spent = projects.iter().map(|p| p.time_spent).sum();

        let completion_rate = if total_projects == 0 {
            0.0
        } else {
            completed_projects as f64 / total_projects as f64 * 100.0
        };

        UserStats {
            total_projects,
            completed_projects,
            total_time_spent,
            current_streak: activity_streak(projects, today),
            completion_rate,
        }
    }
}

fn activity_streak(projects: &[Project], today: NaiveDate) -> u32 {
    let active_days: HashSet<NaiveDate> = projects
        .iter()
        .flat_map(|p| [p.created_at.date_naive(), p.updated_at.date_naive()])
        .collect();

    let start = if active_days.contains(&today) {
        Some(today)
    } else {
        today
            .checked_sub_days(Days::new(1))
            .filter(|yesterday| active_days.contains(yesterday))
    };

    let mut streak = 0;
    let mut cursor = start;
    while let Some(day) = cursor.filter(|d| active_days.contains(d)) {
        streak += 1;
        cursor = day.checked_sub_days(Days::new(1));
    }
    streak
}
