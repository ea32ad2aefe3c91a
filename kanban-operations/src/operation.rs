//! Operation metadata and execution traits

use async_trait::async_trait;
use serde_json::Value;

/// Static metadata describing a command
///
/// Normally implemented through the `#[operation]` attribute rather than by hand.
pub trait Operation {
    /// The action, e.g. "add"
    fn verb(&self) -> &'static str;

    /// The entity acted upon, e.g. "task"
    fn noun(&self) -> &'static str;

    /// Human-readable summary
    fn description(&self) -> &'static str;

    /// Canonical op string ("add task", "toggle checklist")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }

    /// Whether running this operation writes to storage
    fn is_mutation(&self) -> bool {
        !matches!(self.verb(), "get" | "list")
    }
}

/// Run a command against a context
#[async_trait]
pub trait Execute<C, E>: Operation + Send + Sync
where
    C: Send + Sync,
{
    /// Execute the command, returning its JSON representation
    async fn execute(&self, ctx: &C) -> Result<Value, E>;
}
