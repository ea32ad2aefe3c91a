//! DeleteBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::BoardId;
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::{json, Value};

/// Confirmation message returned after a delete
pub const BOARD_DELETED: &str = "Board deleted successfully.";

/// Delete a board and everything it contains
#[operation(verb = "delete", noun = "board", description = "Delete a board")]
#[derive(Debug, Deserialize)]
pub struct DeleteBoard {
    /// The board ID to delete
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        ctx.delete_board(&self.id).await?;
        Ok(json!({ "message": BOARD_DELETED }))
    }
}
