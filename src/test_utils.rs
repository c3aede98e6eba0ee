use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::models::domain::{Project, ProjectStatus, Step};

fn fixture_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A step with every text field filled in and a single hint.
    pub fn full_step(title: &str) -> Step {
        Step {
            title: Some(title.to_string()),
            description: Some(format!("Work through {} end to end", title.to_lowercase())),
            learning_focus: Some(format!("Understanding {}", title.to_lowercase())),
            connection_to_goal: Some(format!("{} unblocks the next milestone", title)),
            hints: vec!["Start from the smallest working piece".to_string()],
        }
    }

    /// Creates a project owned by `user_id` with two fully described steps
    pub fn project_with_steps(user_id: &str, project_id: &str, difficulty: i32) -> Project {
        let created_at = fixture_start();
        Project {
            id: project_id.to_string(),
            user_id: user_id.to_string(),
            title: "Plant watering monitor".to_string(),
            domain: Some("embedded".to_string()),
            status: ProjectStatus::InProgress,
            created_at,
            updated_at: created_at + Duration::hours(3),
            time_spent: 90,
            technologies: vec!["Rust".to_string(), "MQTT".to_string()],
            difficulty,
            steps: vec![full_step("Wire the sensor"), full_step("Publish readings")],
        }
    }

    /// Creates a completed project for `user-1`, finished two hours after it
    /// was started
    pub fn completed_project(id: &str) -> Project {
        project_with(id, ProjectStatus::Completed, 180, &[], 5)
    }

    pub fn project_with(
        id: &str,
        status: ProjectStatus,
        time_spent: u32,
        technologies: &[&str],
        difficulty: i32,
    ) -> Project {
        let created_at = fixture_start();
        Project {
            id: id.to_string(),
            user_id: "user-1".to_string(),
            title: format!("Project {}", id),
            domain: None,
            status,
            created_at,
            updated_at: created_at + Duration::hours(2),
            time_spent,
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            difficulty,
            steps: vec![],
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn project_with_steps_has_two_quizzable_steps() {
        let project = project_with_steps("user-1", "project-1", 5);

        assert_eq!(project.steps.len(), 2);
        assert!(project.steps.iter().all(|s| s.title().is_some() && s.description().is_some()));
        assert!(project.steps.iter().all(|s| s.hints.len() < 2));
    }

    #[test]
    fn completed_project_finishes_within_a_day() {
        let project = completed_project("p-1");

        assert!(project.is_completed());
        assert_eq!(project.elapsed(), Duration::hours(2));
        assert_eq!(project.user_id, "user-1");
    }
}
