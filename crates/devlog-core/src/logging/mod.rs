//! Console sinks and the log engine

mod traits;
mod noop;
mod console;
mod engine;

pub use traits::{ConsoleSink, SharedConsole};
pub use noop::NoOpConsole;
pub use console::{MemoryConsole, StdoutConsole};
pub use engine::LogEngine;
