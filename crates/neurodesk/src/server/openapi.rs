use utoipa::OpenApi;

use crate::command::CommandKind;
use crate::server::commands::{CommandPlanBody, RunCommandRequest, RunCommandResponse};
use crate::server::error::{ApiErrorBody, ApiErrorResponse};
use crate::server::{HealthResponse, HelloResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Neurodesk API",
        version = "0.1.0",
        description = "Command planning backend for the Neurodesk desktop client"
    ),
    paths(
        crate::server::health,
        crate::server::hello,
        crate::server::commands::run_command,
    ),
    components(schemas(
        // Error
        ApiErrorResponse,
        ApiErrorBody,
        // Commands
        RunCommandRequest,
        RunCommandResponse,
        CommandPlanBody,
        CommandKind,
        // System
        HealthResponse,
        HelloResponse,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_lists_all_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/health"));
        assert!(doc.paths.paths.contains_key("/api/hello"));
        assert!(doc.paths.paths.contains_key("/commands/run"));
    }
}
