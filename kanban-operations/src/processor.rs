//! Operation processor - runs commands with timing and structured logging

use crate::operation::Execute;
use serde_json::Value;
use std::fmt::Display;
use std::time::Instant;
use tracing::Instrument;

/// Runs operations inside a tracing span named after the op string.
///
/// Mutations are reported at `info`, reads at `debug`, failures at `warn`.
/// The processor holds no state besides the optional actor label, so one
/// instance can be shared by every request.
#[derive(Debug, Clone, Default)]
pub struct OperationProcessor {
    actor: Option<String>,
}

impl OperationProcessor {
    /// Create a processor with no actor attribution
    pub fn new() -> Self {
        Self { actor: None }
    }

    /// Create a processor that tags every log line with an actor
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    /// The actor label, if any
    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    /// Execute an operation against a context
    pub async fn process<C, E, O>(&self, op: &O, ctx: &C) -> Result<Value, E>
    where
        C: Send + Sync,
        E: Display,
        O: Execute<C, E> + ?Sized,
    {
        let op_string = op.op_string();
        let span = tracing::info_span!(
            "operation",
            op = %op_string,
            actor = self.actor.as_deref().unwrap_or("-"),
        );

        let start = Instant::now();
        let result = op.execute(ctx).instrument(span.clone()).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let _enter = span.enter();
        match &result {
            Ok(_) if op.is_mutation() => {
                tracing::info!(duration_ms, "{} succeeded", op_string);
            }
            Ok(_) => {
                tracing::debug!(duration_ms, "{} succeeded", op_string);
            }
            Err(error) => {
                tracing::warn!(duration_ms, %error, "{} failed", op_string);
            }
        }

        result
    }
}
