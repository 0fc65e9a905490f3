//! CLI commands for waypoint

pub mod demo;
pub mod dispatch;
pub mod dot;
pub mod helpers;
pub mod path;
pub mod traverse;
