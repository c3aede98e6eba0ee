use async_graphql::{Context, Object, ID};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppResult,
    graphql::helpers::parse_id,
    models::dto::{
        request::SubmitStepQuizInput,
        response::{AchievementCheckResponse, QuizAttemptResponse, QuizForTaking},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn start_step_quiz(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        project_id: ID,
        step_index: u32,
    ) -> AppResult<QuizForTaking> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;
        let project_id = parse_id(&project_id)?;

        let session = state
            .quiz_service
            .start_step_quiz(&user_id, &project_id, step_index)
            .await?;
        Ok(QuizForTaking::from(&session))
    }

    async fn submit_step_quiz(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        input: SubmitStepQuizInput,
    ) -> AppResult<QuizAttemptResponse> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;
        input.validate()?;

        let attempt = state
            .quiz_attempt_service
            .submit_answers(&user_id, &input.session_id, input.answer_map())
            .await?;
        Ok(QuizAttemptResponse::from(attempt))
    }

    async fn check_achievements(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
    ) -> AppResult<AchievementCheckResponse> {
        let state = ctx.data::<AppState>()?;
        let user_id = parse_id(&user_id)?;

        state.achievement_service.check_and_award(&user_id).await
    }
}
