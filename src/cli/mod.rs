//! Terminal front end for the oxo engine
//!
//! The commands here are a presentation layer over [`crate::session`] and
//! [`crate::search`]: they parse arguments, render boards and forward cell
//! indices. No game rules live in this module.

pub mod commands;
pub mod output;
