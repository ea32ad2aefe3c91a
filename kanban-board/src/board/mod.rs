//! Board commands

mod create;
mod delete;
mod get;
mod list;
mod replace;

pub use create::CreateBoard;
pub use delete::{DeleteBoard, BOARD_DELETED};
pub use get::GetBoard;
pub use list::ListBoards;
pub use replace::ReplaceBoard;
