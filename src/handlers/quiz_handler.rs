use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::SubmitQuizRequest,
        response::{QuizAttemptResponse, QuizForTaking},
    },
};

#[post("/api/users/{user_id}/projects/{project_id}/steps/{step_index}/quiz")]
async fn start_step_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String, u32)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, project_id, step_index) = path.into_inner();
    let session = state
        .quiz_service
        .start_step_quiz(&user_id, &project_id, step_index)
        .await?;
    Ok(HttpResponse::Created().json(QuizForTaking::from(&session)))
}

#[post("/api/users/{user_id}/quiz-sessions/{session_id}/submit")]
async fn submit_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<SubmitQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let (user_id, session_id) = path.into_inner();
    let request = request.into_inner();
    request.validate()?;

    let attempt = state
        .quiz_attempt_service
        .submit_answers(&user_id, &session_id, request.answers)
        .await?;
    Ok(HttpResponse::Created().json(QuizAttemptResponse::from(attempt)))
}

#[get("/api/users/{user_id}/projects/{project_id}/steps/{step_index}/best-score")]
async fn best_step_score(
    state: web::Data<AppState>,
    path: web::Path<(String, String, u32)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, project_id, step_index) = path.into_inner();
    let best = state
        .quiz_attempt_service
        .best_step_score(&user_id, &project_id, step_index)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "No attempts for step {} of project '{}'",
                step_index, project_id
            ))
        })?;
    Ok(HttpResponse::Ok().json(QuizAttemptResponse::from(best)))
}

#[get("/api/users/{user_id}/projects/{project_id}/steps/{step_index}/attempts")]
async fn step_attempts(
    state: web::Data<AppState>,
    path: web::Path<(String, String, u32)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, project_id, step_index) = path.into_inner();
    let attempts: Vec<QuizAttemptResponse> = state
        .quiz_attempt_service
        .step_attempts(&user_id, &project_id, step_index)
        .await?
        .into_iter()
        .map(QuizAttemptResponse::from)
        .collect();
    Ok(HttpResponse::Ok().json(attempts))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::domain::{Difficulty, QuestionKind, QuizOption, QuizQuestion, QuizSession};
    use crate::repositories::achievement_repository::MockAchievementRepository;
    use crate::repositories::project_repository::MockProjectRepository;
    use crate::repositories::quiz_attempt_repository::MockQuizAttemptRepository;
    use crate::repositories::quiz_session_repository::MockQuizSessionRepository;
    use crate::test_utils::fixtures::project_with_steps;
    use crate::test_utils::test_helpers::{assert_error_status, assert_success_status};
    use actix_web::{http::StatusCode, test, App};

    fn state_with(
        projects: MockProjectRepository,
        sessions: MockQuizSessionRepository,
        attempts: MockQuizAttemptRepository,
    ) -> AppState {
        AppState::with_repositories(
            Arc::new(projects),
            Arc::new(sessions),
            Arc::new(attempts),
            Arc::new(MockAchievementRepository::new()),
        )
    }

    #[actix_web::test]
    async fn start_quiz_returns_questions_without_answer_key() {
        let mut projects = MockProjectRepository::new();
        projects
            .expect_find_by_id()
            .returning(|_| Ok(Some(project_with_steps("user-1", "project-1", 8))));
        let mut sessions = MockQuizSessionRepository::new();
        sessions.expect_create().returning(Ok);

        let state = state_with(projects, sessions, MockQuizAttemptRepository::new());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(start_step_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/user-1/projects/project-1/steps/0/quiz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_success_status(resp.status());
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["step_index"], 0);
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(4));
        let raw = body.to_string();
        assert!(!raw.contains("\"correct\""));
        assert!(!raw.contains("explanation"));
    }

    #[actix_web::test]
    async fn start_quiz_on_foreign_project_is_forbidden() {
        let mut projects = MockProjectRepository::new();
        projects
            .expect_find_by_id()
            .returning(|_| Ok(Some(project_with_steps("someone-else", "project-1", 3))));

        let state = state_with(
            projects,
            MockQuizSessionRepository::new(),
            MockQuizAttemptRepository::new(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(start_step_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/user-1/projects/project-1/steps/0/quiz")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_error_status(resp.status());
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    fn two_question_session() -> QuizSession {
        let mut session = QuizSession::new(
            "user-1",
            "project-1",
            0,
            vec![
                QuizQuestion {
                    id: "step0_q1".to_string(),
                    kind: QuestionKind::MultipleChoice {
                        options: vec![
                            QuizOption {
                                id: "a".to_string(),
                                text: "Guess".to_string(),
                                correct: false,
                            },
                            QuizOption {
                                id: "b".to_string(),
                                text: "Measure first".to_string(),
                                correct: true,
                            },
                        ],
                    },
                    question: "Which approach?".to_string(),
                    explanation: "Measure first".to_string(),
                    difficulty: Difficulty::Easy,
                    points: 25,
                },
                QuizQuestion {
                    id: "step0_q2".to_string(),
                    kind: QuestionKind::TrueFalse { correct: true },
                    question: "This step matters.".to_string(),
                    explanation: "It does".to_string(),
                    difficulty: Difficulty::Easy,
                    points: 25,
                },
            ],
        );
        session.id = "session-1".to_string();
        session
    }

    #[actix_web::test]
    async fn submit_scores_valid_answers_alongside_null_ones() {
        let mut sessions = MockQuizSessionRepository::new();
        sessions
            .expect_find_by_id()
            .returning(|_| Ok(Some(two_question_session())));
        let mut attempts = MockQuizAttemptRepository::new();
        attempts.expect_create().times(1).returning(Ok);

        let state = state_with(MockProjectRepository::new(), sessions, attempts);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(submit_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/user-1/quiz-sessions/session-1/submit")
            .set_json(serde_json::json!({ "answers": { "step0_q1": "b", "step0_q2": null } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["score"]["correct_answers"], 1);
        assert_eq!(body["score"]["earned_points"], 25);
        assert_eq!(body["score"]["percentage"], 50);
        assert_eq!(body["score"]["passed"], false);
    }

    #[actix_web::test]
    async fn submit_with_blank_question_id_is_rejected() {
        let mut attempts = MockQuizAttemptRepository::new();
        attempts.expect_create().never();

        let state = state_with(
            MockProjectRepository::new(),
            MockQuizSessionRepository::new(),
            attempts,
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(submit_quiz),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users/user-1/quiz-sessions/session-1/submit")
            .set_json(serde_json::json!({ "answers": { "": "b" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn best_score_without_attempts_is_not_found() {
        let mut attempts = MockQuizAttemptRepository::new();
        attempts.expect_find_by_step().returning(|_, _, _| Ok(vec![]));

        let state = state_with(
            MockProjectRepository::new(),
            MockQuizSessionRepository::new(),
            attempts,
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(best_step_score),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users/user-1/projects/project-1/steps/2/best-score")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
