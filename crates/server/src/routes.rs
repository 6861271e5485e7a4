use std::{
    collections::{BTreeMap, VecDeque},
    sync::Arc,
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use liftplan_domain::{self as domain, ProgramService, Service, UserID};
use liftplan_storage::{MemoryStorage, wire};

use crate::{error::AppError, log as app_log, settings::Settings};

pub struct AppState {
    pub service: Service<MemoryStorage>,
    pub tokens: BTreeMap<String, UserID>,
    pub log: Arc<dyn app_log::Repository>,
}

impl AppState {
    pub fn new(
        service: Service<MemoryStorage>,
        settings: &Settings,
        log: Arc<dyn app_log::Repository>,
    ) -> Self {
        Self {
            service,
            tokens: settings
                .tokens
                .iter()
                .map(|(token, user_id)| (token.clone(), UserID::from(*user_id)))
                .collect(),
            log,
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<UserID, AppError> {
        headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .and_then(|token| self.tokens.get(token.trim()))
            .copied()
            .ok_or(AppError::Unauthorized)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesResponse {
    pub preferences: wire::Preferences,
    pub workouts: Vec<wire::Workout>,
}

pub struct ProgramRoutes;

impl ProgramRoutes {
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/api/workouts", get(Self::handle_list))
            .route("/api/workouts/generate", post(Self::handle_generate))
            .route(
                "/api/preferences",
                get(Self::handle_get_preferences).put(Self::handle_put_preferences),
            )
            .route("/api/coach/regenerate", post(Self::handle_coach_regenerate))
            .route("/api/catalog", get(Self::handle_catalog))
            .route("/api/log", get(Self::handle_log))
            .with_state(state)
    }

    async fn handle_list(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
    ) -> Result<Json<Vec<wire::Workout>>, AppError> {
        let user_id = state.authenticate(&headers)?;
        let workouts = state.service.get_program(user_id).await?;
        Ok(Json(workouts.iter().map(wire::Workout::from).collect()))
    }

    async fn handle_generate(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
    ) -> Result<(StatusCode, Json<Vec<wire::Workout>>), AppError> {
        let user_id = state.authenticate(&headers)?;
        let workouts = state.service.generate_program(user_id).await?;
        Ok((
            StatusCode::CREATED,
            Json(workouts.iter().map(wire::Workout::from).collect()),
        ))
    }

    async fn handle_get_preferences(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
    ) -> Result<Json<wire::Preferences>, AppError> {
        let user_id = state.authenticate(&headers)?;
        let preferences = state.service.get_preferences(user_id).await?;
        Ok(Json(wire::Preferences::from(preferences)))
    }

    async fn handle_put_preferences(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        Json(body): Json<wire::Preferences>,
    ) -> Result<Json<PreferencesResponse>, AppError> {
        let user_id = state.authenticate(&headers)?;
        let preferences = domain::UserPreferences::try_from(body)?;
        let workouts = state
            .service
            .set_preferences(user_id, preferences.clone())
            .await?;
        Ok(Json(PreferencesResponse {
            preferences: wire::Preferences::from(preferences),
            workouts: workouts.iter().map(wire::Workout::from).collect(),
        }))
    }

    async fn handle_coach_regenerate(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
        Json(body): Json<wire::RegenerateRequest>,
    ) -> Result<(StatusCode, Json<Vec<wire::Workout>>), AppError> {
        let user_id = state.authenticate(&headers)?;
        let workouts = state
            .service
            .regenerate_with_constraints(user_id, body.into())
            .await?;
        Ok((
            StatusCode::CREATED,
            Json(workouts.iter().map(wire::Workout::from).collect()),
        ))
    }

    async fn handle_catalog(
        State(state): State<Arc<AppState>>,
    ) -> Result<Json<wire::Catalog>, AppError> {
        let catalog = state.service.get_catalog().await?;
        Ok(Json(wire::Catalog::from(&catalog)))
    }

    async fn handle_log(
        State(state): State<Arc<AppState>>,
        headers: HeaderMap,
    ) -> Result<Json<VecDeque<app_log::Entry>>, AppError> {
        state.authenticate(&headers)?;
        Ok(Json(state.log.read_entries()?))
    }
}
