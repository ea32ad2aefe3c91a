//! Checklist commands

mod toggle;

pub use toggle::ToggleChecklistItem;
