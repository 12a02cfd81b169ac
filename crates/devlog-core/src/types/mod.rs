//! Core types shared across the logger

mod severity;
mod tag;
mod entry;

pub use severity::Severity;
pub use tag::Tag;
pub use entry::LogEntry;
