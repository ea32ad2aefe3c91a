//! # Kanban Operations
//!
//! This crate provides the `Operation` trait for defining board commands.
//! Commands are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use kanban_operations::*;
//!
//! #[operation(verb = "add", noun = "task", description = "Append a task to a column")]
//! #[derive(Debug, Deserialize)]
//! pub struct AddTask {
//!     /// The board to edit
//!     pub board_id: BoardId,
//!     /// Target column position
//!     pub column: usize,
//! }
//!
//! #[async_trait]
//! impl Execute<BoardContext, KanbanError> for AddTask {
//!     async fn execute(&self, ctx: &BoardContext) -> Result<Value, KanbanError> {
//!         // load, mutate, save
//!     }
//! }
//! ```

mod operation;
mod processor;

pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export proc macro
pub use kanban_operations_macros::operation;

// Re-export for use in implementations
pub use async_trait::async_trait;
pub use serde_json::Value;
