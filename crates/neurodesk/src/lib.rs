pub mod command;
pub mod server;

pub use crate::command::{normalize_url, CommandAction, CommandKind, CommandPlan, CommandPlanner};
pub use crate::server::Server;
