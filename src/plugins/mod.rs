//! Subsystem plugins. Each plugin owns its CLI surface and schema.

pub mod browse;
pub mod guide;
pub mod map;
