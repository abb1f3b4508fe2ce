use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::command::{CommandKind, CommandPlan};
use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RunCommandRequest {
    pub text: String,
}

/// Wire form of a plan: the tag plus at most one populated payload field.
/// Fields that do not apply to the kind serialise as explicit `null`.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommandPlanBody {
    pub kind: CommandKind,
    pub app: Option<String>,
    pub url: Option<String>,
    pub query: Option<String>,
    pub raw: String,
}

impl From<CommandPlan> for CommandPlanBody {
    fn from(plan: CommandPlan) -> Self {
        Self {
            kind: plan.kind(),
            app: plan.app().map(str::to_string),
            url: plan.url().map(str::to_string),
            query: plan.query().map(str::to_string),
            raw: plan.raw,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RunCommandResponse {
    pub ok: bool,
    pub plan: CommandPlanBody,
    /// The request text, untrimmed, so the client can correlate.
    pub echo: String,
}

#[utoipa::path(
    post,
    path = "/commands/run",
    tag = "commands",
    request_body = RunCommandRequest,
    responses(
        (status = 200, description = "Planned command", body = RunCommandResponse),
        (status = 400, body = ApiErrorResponse),
    ),
    description = "Classify a free-text utterance into a command plan."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn run_command(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<RunCommandRequest>,
) -> Result<Json<RunCommandResponse>, ApiError> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::bad_request("empty command"));
    }
    let plan = state.planner.plan(&payload.text);
    tracing::debug!(kind = ?plan.kind(), "planned command");
    Ok(Json(RunCommandResponse {
        ok: true,
        plan: plan.into(),
        echo: payload.text,
    }))
}
