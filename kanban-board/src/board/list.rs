//! ListBoards command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// List every board document
#[operation(verb = "list", noun = "boards", description = "List all boards")]
#[derive(Debug, Default, Deserialize)]
pub struct ListBoards;

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListBoards {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let boards = ctx.read_all_boards().await?;
        Ok(serde_json::to_value(&boards)?)
    }
}
