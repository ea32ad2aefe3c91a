//! Core types for the board engine

mod board;
mod ids;
mod task;

// Re-export all types
pub use board::{Board, BoardFields, Column};
pub use ids::BoardId;
pub use task::{ChecklistItem, Task, TaskPatch};
