//! CreateBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{Board, BoardFields, Column};
use kanban_operations::{async_trait, operation, Execute};
use serde::Deserialize;
use serde_json::Value;

/// Create a new board with a generated id
#[operation(verb = "create", noun = "board", description = "Create a new board")]
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CreateBoard {
    /// Name, active flag and initial columns
    pub fields: BoardFields,
}

impl CreateBoard {
    /// Create an inactive board with no columns
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            fields: BoardFields::new(name),
        }
    }

    /// Set the active flag
    pub fn active(mut self, is_active: bool) -> Self {
        self.fields.is_active = is_active;
        self
    }

    /// Append a column
    pub fn with_column(mut self, column: Column) -> Self {
        self.fields.columns.push(column);
        self
    }
}

impl From<BoardFields> for CreateBoard {
    fn from(fields: BoardFields) -> Self {
        Self { fields }
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for CreateBoard {
    async fn execute(&self, ctx: &BoardContext) -> Result<Value> {
        let board = Board::new(self.fields.clone());
        ctx.create_board(&board).await?;
        Ok(serde_json::to_value(&board)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Task;

    #[tokio::test]
    async fn test_create_board() {
        let ctx = BoardContext::in_memory();

        let cmd = CreateBoard::new("Sprint")
            .active(true)
            .with_column(Column::new("To Do"))
            .with_column(Column::new("Done"));
        let result = cmd.execute(&ctx).await.unwrap();

        assert_eq!(result["name"], "Sprint");
        assert_eq!(result["isActive"], true);
        assert_eq!(result["columns"].as_array().unwrap().len(), 2);
        assert_eq!(result["id"].as_str().unwrap().len(), 26);
    }

    #[tokio::test]
    async fn test_create_keeps_nested_tasks() {
        let ctx = BoardContext::in_memory();

        let cmd = CreateBoard::new("Seeded")
            .with_column(Column::new("To Do").with_task(Task::new("first", "todo")));
        let result = cmd.execute(&ctx).await.unwrap();

        assert_eq!(result["columns"][0]["tasks"][0]["title"], "first");
    }

    #[tokio::test]
    async fn test_create_from_json_payload() {
        let ctx = BoardContext::in_memory();

        let cmd: CreateBoard = serde_json::from_value(serde_json::json!({
            "name": "From JSON",
            "isActive": false,
            "columns": [{"name": "Backlog", "tasks": []}]
        }))
        .unwrap();
        let result = cmd.execute(&ctx).await.unwrap();

        assert_eq!(result["columns"][0]["name"], "Backlog");
    }

    #[tokio::test]
    async fn test_create_blank_name_fails() {
        let ctx = BoardContext::in_memory();
        let result = CreateBoard::new(" ").execute(&ctx).await;
        assert!(matches!(result, Err(KanbanError::MissingField { .. })));
    }
}
