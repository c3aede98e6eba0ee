use async_graphql::{Context, Object, ID};

use crate::{
    app_state::AppState,
    constants::achievements::ACHIEVEMENTS,
    errors::AppResult,
    graphql::helpers::parse_id,
    models::{
        domain::UserStats,
        dto::response::{AchievementOverview, AchievementSummary, QuizAttemptResponse},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn achievement_catalog(&self) -> Vec<AchievementSummary> {
        ACHIEVEMENTS.iter().map(AchievementSummary::from).collect()
    }

    async fn achievement_progress(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
    ) -> AppResult<AchievementOverview> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;

        state.achievement_service.overview(&user_id).await
    }

    /// Progress (0-100) toward a single achievement.
    async fn achievement_progress_for(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        achievement_id: String,
    ) -> AppResult<u32> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;

        state
            .achievement_service
            .progress_for(&user_id, &achievement_id)
            .await
    }

    async fn user_stats(&self, ctx: &Context<'_>, user_id: ID) -> AppResult<UserStats> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;

        state.achievement_service.user_stats(&user_id).await
    }

    async fn best_step_score(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        project_id: ID,
        step_index: u32,
    ) -> AppResult<Option<QuizAttemptResponse>> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;
        let project_id = parse_id(&project_id)?;

        let best = state
            .quiz_attempt_service
            .best_step_score(&user_id, &project_id, step_index)
            .await?;
        Ok(best.map(QuizAttemptResponse::from))
    }

    async fn step_attempts(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        project_id: ID,
        step_index: u32,
    ) -> AppResult<Vec<QuizAttemptResponse>> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;
        let project_id = parse_id(&project_id)?;

        let attempts = state
            .quiz_attempt_service
            .step_attempts(&user_id, &project_id, step_index)
            .await?;
        Ok(attempts.into_iter().map(QuizAttemptResponse::from).collect())
    }
}
