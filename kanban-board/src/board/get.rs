//! GetBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::BoardId;
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Load a single board
#[operation(verb = "get", noun = "board", description = "Retrieve one board by id")]
#[derive(Debug, Deserialize)]
pub struct GetBoard {
    /// The board ID
    pub id: BoardId,
}

impl GetBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let board = ctx.read_board(&self.id).await?;
        Ok(serde_json::to_value(&board)?)
    }
}
