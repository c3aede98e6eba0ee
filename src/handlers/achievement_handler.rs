use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    constants::achievements::ACHIEVEMENTS,
    errors::AppError,
    models::dto::response::AchievementSummary,
};

#[post("/api/users/{user_id}/achievements/check")]
async fn check_achievements(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.achievement_service.check_and_award(&user_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/users/{user_id}/achievements")]
async fn achievement_overview(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let overview = state.achievement_service.overview(&user_id).await?;
    Ok(HttpResponse::Ok().json(overview))
}

#[get("/api/users/{user_id}/achievements/{achievement_id}/progress")]
async fn achievement_progress(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, achievement_id) = path.into_inner();
    let progress = state
        .achievement_service
        .progress_for(&user_id, &achievement_id)
        .await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "achievement_id": achievement_id,
        "progress": progress
    })))
}

#[get("/api/users/{user_id}/stats")]
async fn user_stats(
    state: web::Data<AppState>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let stats = state.achievement_service.user_stats(&user_id).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/api/achievements/catalog")]
async fn achievement_catalog() -> HttpResponse {
    let catalog: Vec<AchievementSummary> = ACHIEVEMENTS.iter().map(AchievementSummary::from).collect();
    HttpResponse::Ok().json(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn catalog_lists_every_achievement() {
        let app = test::init_service(App::new().service(achievement_catalog)).await;

        let req = test::TestRequest::get()
            .uri("/api/achievements/catalog")
            .to_request();
        let body: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.len(), ACHIEVEMENTS.len());
        assert_eq!(body[0]["id"], "first_project");
    }
}
