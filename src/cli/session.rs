use crate::services::common::Property;

/// Per-invocation state that outlives the command and is written back to
/// the runtime state file
#[derive(Clone, Debug)]
pub struct Session {
    /// Learner chosen with `progress user`, if any
    pub user: Property<Option<String>>,
}

impl Session {
    /// Session starting from a previously stored learner.
    pub fn new(user: Option<String>) -> Self {
        Self {
            user: Property::new(user),
        }
    }
}
