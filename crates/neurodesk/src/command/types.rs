use serde::Serialize;
use utoipa::ToSchema;

/// Tag identifying what a plan asks the client to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    OpenApp,
    OpenUrl,
    Search,
    Unknown,
}

/// Payload of a plan. Each variant carries only the field that applies to its
/// kind, so a plan can never hold both an app name and a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    OpenApp { app: String },
    /// `url` always carries an explicit scheme.
    OpenUrl { url: String },
    Search { query: String },
    Unknown,
}

/// Result of planning one utterance. Built once by the planner, read by the
/// HTTP layer, then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPlan {
    pub action: CommandAction,
    /// The input with outer whitespace stripped.
    pub raw: String,
}

impl CommandPlan {
    pub fn open_app(app: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            action: CommandAction::OpenApp { app: app.into() },
            raw: raw.into(),
        }
    }

    pub fn open_url(url: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            action: CommandAction::OpenUrl { url: url.into() },
            raw: raw.into(),
        }
    }

    pub fn search(query: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            action: CommandAction::Search {
                query: query.into(),
            },
            raw: raw.into(),
        }
    }

    pub fn unknown(raw: impl Into<String>) -> Self {
        Self {
            action: CommandAction::Unknown,
            raw: raw.into(),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self.action {
            CommandAction::OpenApp { .. } => CommandKind::OpenApp,
            CommandAction::OpenUrl { .. } => CommandKind::OpenUrl,
            CommandAction::Search { .. } => CommandKind::Search,
            CommandAction::Unknown => CommandKind::Unknown,
        }
    }

    pub fn app(&self) -> Option<&str> {
        match &self.action {
            CommandAction::OpenApp { app } => Some(app),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match &self.action {
            CommandAction::OpenUrl { url } => Some(url),
            _ => None,
        }
    }

    pub fn query(&self) -> Option<&str> {
        match &self.action {
            CommandAction::Search { query } => Some(query),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_project_only_the_matching_field() {
        let plan = CommandPlan::open_url("https://example.com", "example.com");
        assert_eq!(plan.kind(), CommandKind::OpenUrl);
        assert_eq!(plan.url(), Some("https://example.com"));
        assert_eq!(plan.app(), None);
        assert_eq!(plan.query(), None);
    }

    #[test]
    fn unknown_carries_no_payload() {
        let plan = CommandPlan::unknown("gibberish");
        assert_eq!(plan.kind(), CommandKind::Unknown);
        assert_eq!(plan.app(), None);
        assert_eq!(plan.url(), None);
        assert_eq!(plan.query(), None);
        assert_eq!(plan.raw, "gibberish");
    }
}
