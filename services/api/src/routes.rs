use crate::infra::{next_session_id, spawn_deliveries, AppState};
use advisory_site::checklist::{
    BandSummary, ChecklistSection, ChecklistSummary, ChecklistTicks, ItemRef, ResultBand, SECTIONS,
};
use advisory_site::content::{Guide, GuideMeta};
use advisory_site::error::AppError;
use advisory_site::survey::domain::AnswerOption;
use advisory_site::survey::report::views::ResultsView;
use advisory_site::survey::{
    render_printable_html, AnswerStore, Category, FieldErrors, Industry, Question, Report,
    Respondent, Stage, SurveyCommand, SurveyEvent, SurveySession,
};
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) answers: Vec<Option<usize>>,
    #[serde(default)]
    pub(crate) respondent: Respondent,
}

#[derive(Debug, Serialize)]
pub(crate) struct CategoryOption {
    pub(crate) category: Category,
    pub(crate) label: &'static str,
    pub(crate) color: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct IndexedQuestion {
    pub(crate) index: usize,
    #[serde(flatten)]
    pub(crate) question: Question,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsResponse {
    pub(crate) categories: Vec<CategoryOption>,
    pub(crate) questions: Vec<IndexedQuestion>,
}

#[derive(Debug, Serialize)]
pub(crate) struct IndustryOption {
    pub(crate) slug: &'static str,
    pub(crate) label: &'static str,
}

/// The question currently on screen, with its progress position.
#[derive(Debug, Serialize)]
pub(crate) struct CurrentQuestion {
    pub(crate) index: usize,
    pub(crate) number: usize,
    pub(crate) total: usize,
    pub(crate) category: Category,
    pub(crate) text: &'static str,
    pub(crate) options: [AnswerOption; 4],
    pub(crate) selected: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SessionResponse {
    #[serde(flatten)]
    pub(crate) session: SurveySession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) question: Option<CurrentQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) results: Option<ResultsView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) commands: Vec<SurveyCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) errors: Option<FieldErrors>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistResponse {
    pub(crate) sections: &'static [ChecklistSection],
    pub(crate) bands: Vec<BandSummary>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ChecklistScoreRequest {
    #[serde(default)]
    pub(crate) ticked: Vec<ItemRef>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GuideFilter {
    #[serde(default)]
    pub(crate) category: Option<String>,
    #[serde(default)]
    pub(crate) tag: Option<String>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/survey/questions", get(questions_endpoint))
        .route("/api/v1/survey/industries", get(industries_endpoint))
        .route(
            "/api/v1/survey/respondent/validate",
            post(validate_respondent_endpoint),
        )
        .route("/api/v1/survey/score", post(score_endpoint))
        .route("/api/v1/survey/report", post(report_endpoint))
        .route("/api/v1/survey/transcript", post(transcript_endpoint))
        .route("/api/v1/survey/sessions", post(create_session_endpoint))
        .route("/api/v1/survey/sessions/:session_id", get(session_endpoint))
        .route(
            "/api/v1/survey/sessions/:session_id/events",
            post(session_event_endpoint),
        )
        .route("/api/v1/checklist", get(checklist_endpoint))
        .route("/api/v1/checklist/score", post(checklist_score_endpoint))
        .route("/api/v1/guides", get(guides_endpoint))
        .route("/api/v1/guides/:slug", get(guide_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn questions_endpoint(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let categories = Category::ordered()
        .into_iter()
        .map(|category| CategoryOption {
            category,
            label: category.label(),
            color: category.color(),
        })
        .collect();
    let questions = state
        .bank
        .questions()
        .iter()
        .enumerate()
        .map(|(index, question)| IndexedQuestion {
            index,
            question: question.clone(),
        })
        .collect();

    Json(QuestionsResponse {
        categories,
        questions,
    })
}

pub(crate) async fn industries_endpoint() -> Json<Vec<IndustryOption>> {
    Json(
        Industry::ordered()
            .into_iter()
            .map(|industry| IndustryOption {
                slug: industry.slug(),
                label: industry.label(),
            })
            .collect(),
    )
}

pub(crate) async fn validate_respondent_endpoint(Json(respondent): Json<Respondent>) -> Response {
    match respondent.validate() {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "errors": errors })),
        )
            .into_response(),
    }
}

fn report_for(state: &AppState, request: ScoreRequest) -> Result<Report, AppError> {
    let answers = AnswerStore::from_slots(&state.bank, request.answers)?;
    Ok(Report::build(
        &state.bank,
        &answers,
        &request.respondent.normalized(),
    ))
}

pub(crate) async fn score_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ResultsView>, AppError> {
    let report = report_for(&state, request)?;
    Ok(Json(report.results_view()))
}

pub(crate) async fn report_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Html<String>, AppError> {
    let report = report_for(&state, request)?;
    Ok(Html(render_printable_html(&report)))
}

pub(crate) async fn transcript_endpoint(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Response, AppError> {
    let report = report_for(&state, request)?;
    let csv = report.transcript_csv()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_CSV_UTF_8.as_ref())],
        csv,
    )
        .into_response())
}

fn session_response(
    state: &AppState,
    session: SurveySession,
    commands: Vec<SurveyCommand>,
    errors: Option<FieldErrors>,
) -> SessionResponse {
    let survey = &session.state;
    let question = match survey.stage {
        Stage::InProgress => {
            state
                .bank
                .question(survey.current_question)
                .map(|question| CurrentQuestion {
                    index: survey.current_question,
                    number: survey.current_question + 1,
                    total: state.bank.len(),
                    category: question.category,
                    text: question.text,
                    options: question.options.clone(),
                    selected: survey.answers.selected(survey.current_question),
                })
        }
        _ => None,
    };
    let results = match survey.stage {
        Stage::Results => {
            Some(Report::build(&state.bank, &survey.answers, &survey.respondent).results_view())
        }
        _ => None,
    };

    SessionResponse {
        session,
        question,
        results,
        commands,
        errors,
    }
}

pub(crate) async fn create_session_endpoint(State(state): State<AppState>) -> Response {
    let session = state
        .sessions
        .insert(SurveySession::new(next_session_id(), &state.bank));
    let body = session_response(&state, session, Vec::new(), None);
    (StatusCode::CREATED, Json(body)).into_response()
}

pub(crate) async fn session_endpoint(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .sessions
        .fetch(&session_id)
        .ok_or_else(|| AppError::NotFound(format!("session '{session_id}'")))?;
    Ok(Json(session_response(&state, session, Vec::new(), None)))
}

pub(crate) async fn session_event_endpoint(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(event): Json<SurveyEvent>,
) -> Result<Response, AppError> {
    let bank = state.bank.clone();
    let transition = state
        .sessions
        .update(&session_id, |session| {
            let transition = session.state.clone().apply(&bank, event);
            session.state = transition.state.clone();
            (session.clone(), transition)
        })
        .ok_or_else(|| AppError::NotFound(format!("session '{session_id}'")))?;
    let (session, transition) = transition;
    if let Some(err) = transition.rejected_answer {
        return Err(err.into());
    }
    let commands = transition.commands;
    let field_errors = transition.field_errors;

    if !commands.is_empty() {
        let report = Report::build(&bank, &session.state.answers, &session.state.respondent);
        spawn_deliveries(state.delivery.clone(), report, commands.clone());
    }

    let status = if field_errors.is_some() {
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        StatusCode::OK
    };
    let body = session_response(&state, session, commands, field_errors);
    Ok((status, Json(body)).into_response())
}

pub(crate) async fn checklist_endpoint() -> Json<ChecklistResponse> {
    let bands = ResultBand::ordered()
        .into_iter()
        .map(BandSummary::from)
        .collect();
    Json(ChecklistResponse {
        sections: &SECTIONS,
        bands,
    })
}

pub(crate) async fn checklist_score_endpoint(
    Json(request): Json<ChecklistScoreRequest>,
) -> Result<Json<ChecklistSummary>, AppError> {
    let ticks = ChecklistTicks::from_refs(&request.ticked)?;
    Ok(Json(ticks.summary()))
}

pub(crate) async fn guides_endpoint(
    State(state): State<AppState>,
    Query(filter): Query<GuideFilter>,
) -> Result<Json<Vec<GuideMeta>>, AppError> {
    let posts = match (filter.category, filter.tag) {
        (Some(category), _) => state.guides.posts_by_category(&category)?,
        (None, Some(tag)) => state.guides.posts_by_tag(&tag)?,
        (None, None) => state.guides.all_posts()?,
    };
    Ok(Json(posts))
}

pub(crate) async fn guide_endpoint(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Guide>, AppError> {
    state
        .guides
        .post_by_slug(&slug)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("guide '{slug}'")))
}
