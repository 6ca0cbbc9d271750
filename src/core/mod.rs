//! Core modules shared by every archemap subsystem.
//!
//! The catalog and decision map live here, along with the terminal
//! rendering primitives the plugin CLIs draw with.

pub mod assets;
pub mod catalog;
pub mod decision;
pub mod error;
pub mod output;
pub mod tui;
