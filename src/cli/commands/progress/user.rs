use async_trait::async_trait;

use crate::cli::{
    Command, CommandResult,
    session::Session,
    types::{ArgType, CommandMetadata, arg},
};

/// Command to show or switch the learner progress is tracked for
///
/// The choice is stored in the runtime state and applies to later
/// invocations.
pub struct UserCommand {
    session: Session,
    active_user: String,
}

impl UserCommand {
    /// Creates a new UserCommand
    pub fn new(session: Session, active_user: &str) -> Self {
        Self {
            session,
            active_user: active_user.to_string(),
        }
    }
}

#[async_trait]
impl Command for UserCommand {
    async fn execute(&self, args: &[String]) -> CommandResult {
        match args.first().map(String::as_str) {
            None => Ok(format!("Learner: {}", self.active_user)),
            Some("--reset") => {
                self.session.user.set(None);
                Ok("Learner reset to the configured default".to_string())
            }
            Some(user_id) => {
                self.session.user.set(Some(user_id.to_string()));
                Ok(format!("Learner: {user_id}"))
            }
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "user".to_string(),
            description: "Show or switch the learner".to_string(),
            category: "progress".to_string(),
            args: vec![arg(
                "user-id",
                "Learner to switch to, or --reset for the configured default",
                false,
                ArgType::Id,
            )],
            examples: vec![
                "coursekit progress user".to_string(),
                "coursekit progress user user-2".to_string(),
                "coursekit progress user --reset".to_string(),
            ],
        }
    }
}
