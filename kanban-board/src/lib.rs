//! Kanban board engine over a document store
//!
//! Boards contain ordered columns, columns contain ordered tasks, tasks
//! contain ordered checklist items. Each board is stored as one document
//! embedding its whole tree, and everything below a board is addressed by
//! zero-based position.
//!
//! ## Overview
//!
//! - **One document per board** - every command loads a board, applies one
//!   positional edit in memory and writes the whole document back
//! - **Explicit storage handle** - a [`BoardContext`] wraps a [`BoardStore`]
//!   opened at start-up and closed at shutdown
//! - **Last write wins** - there is no locking across a load-mutate-save
//!   cycle; concurrent edits to one board race
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use kanban_board::{board::CreateBoard, task::{AddTask, DragTask}, BoardContext, Column, Execute, Task};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::open_dir("/var/lib/kanban-board").await?;
//!
//! let board = CreateBoard::new("Sprint")
//!     .active(true)
//!     .with_column(Column::new("To Do"))
//!     .with_column(Column::new("Done"))
//!     .execute(&ctx)
//!     .await?;
//! let id = board["id"].as_str().unwrap_or_default();
//!
//! AddTask::new(id, 0, Task::new("Write release notes", "todo")).execute(&ctx).await?;
//! DragTask::new(id, 0, 1, 0).execute(&ctx).await?;
//!
//! ctx.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! data_dir/
//! ├── .lock                # Held while a process serves this directory
//! └── boards/
//!     └── {id}.json        # Board document with columns, tasks, checklists
//! ```

mod context;
mod error;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod checklist;
pub mod task;

// Re-export Execute trait and types from operations crate
pub use kanban_operations::{async_trait, Execute, Operation, OperationProcessor};

pub use context::BoardContext;
pub use error::{KanbanError, Result};
pub use store::{BoardStore, FileBoardStore, MemoryBoardStore};

// Re-export commonly used types
pub use types::{Board, BoardFields, BoardId, ChecklistItem, Column, Task, TaskPatch};
