//! Bridge between the UI thread and the catalog worker thread.

pub mod commands;
pub mod runtime;
