//! Core data structures for task tracking.

mod config;
mod task;

pub use config::{OutputFormat, TrackerConfig};
pub use task::{
    capitalize, parse_deadline, Priority, Status, Task, DEADLINE_DISPLAY_FORMAT, DEADLINE_FORMAT,
};
