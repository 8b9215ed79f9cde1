use actix_web::{web, HttpResponse, Responder};
use crate::config::MatchingSettings;
use crate::core::SkillMatcher;
use crate::models::{ErrorResponse, HealthResponse, RankMentorsRequest, RankMentorsResponse, RankOptions, ScoreMentorRequest};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: SkillMatcher,
    pub matching: MatchingSettings,
}

/// Configure all mentor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors/rank", web::post().to(rank_mentors))
        .route("/mentors/score", web::post().to(score_mentor));
}

/// Health check endpoint
///
/// Healthy when the lexicon backing synonym expansion is loaded.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let lexicon_synsets = state.matcher.lexicon_size();
    let status = if lexicon_synsets > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        lexicon_synsets,
    })
}

/// Rank mentors endpoint
///
/// POST /api/v1/mentors/rank
///
/// Request body:
/// ```json
/// {
///   "learnerSkills": ["string"],
///   "mentors": [{"skills": ["string"], "isVerified": true}],
///   "minScore": 0.1,
///   "maxResults": 10
/// }
/// ```
async fn rank_mentors(
    state: web::Data<AppState>,
    req: web::Json<RankMentorsRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let min_score = req.min_score.unwrap_or(state.matching.min_score);
    // Cap results to prevent excessive responses
    let max_results = req
        .max_results
        .unwrap_or(state.matching.max_results)
        .min(state.matching.max_results_limit);

    let options = match RankOptions::new(min_score, max_results) {
        Ok(options) => options,
        Err(e) => {
            tracing::info!("Validation failed for rank request: {}", e);
            return bad_request("Validation failed", e.to_string());
        }
    };

    tracing::info!(
        "Ranking {} mentors for {} learner skills (min_score: {}, max_results: {})",
        req.mentors.len(),
        req.learner_skills.len(),
        options.min_score,
        options.max_results
    );

    let matcher = state.matcher.clone();
    let ranked = tokio::task::spawn_blocking(move || {
        matcher.rank_mentors(&req.learner_skills, req.mentors, &options)
    })
    .await;

    match ranked {
        Ok(result) => HttpResponse::Ok().json(RankMentorsResponse::from(result).with_criteria(options)),
        Err(e) => {
            tracing::error!("Ranking task failed: {}", e);
            internal_error("Ranking failed", e.to_string())
        }
    }
}

/// Single mentor score endpoint
///
/// POST /api/v1/mentors/score
///
/// Returns the ranked mentor, or `null` when the mentor cannot be scored.
async fn score_mentor(
    state: web::Data<AppState>,
    req: web::Json<ScoreMentorRequest>,
) -> impl Responder {
    let req = req.into_inner();

    let matcher = state.matcher.clone();
    let scored = tokio::task::spawn_blocking(move || matcher.score_mentor(&req.learner_skills, req.mentor)).await;

    match scored {
        Ok(ranked) => HttpResponse::Ok().json(ranked),
        Err(e) => {
            tracing::error!("Scoring task failed: {}", e);
            internal_error("Scoring failed", e.to_string())
        }
    }
}

fn bad_request(error: &str, message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 400,
    })
}

fn internal_error(error: &str, message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 500,
    })
}
