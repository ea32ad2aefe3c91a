//! Task commands

mod add;
mod delete;
mod drag;
mod edit;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use drag::DragTask;
pub use edit::EditTask;
