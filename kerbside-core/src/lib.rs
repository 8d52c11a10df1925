//! Core rules and schedule generation for the kerbside collection calendar.

/// In-memory year table caches.
pub mod cache;
/// File-based configuration.
pub mod config;
/// Christmas and New Year postponements.
pub mod holiday;
/// Domain models shared by the core and its clients.
pub mod model;
/// Traits describing pluggable collaborators.
pub mod ports;
/// Weekly and fortnightly collection rules.
pub mod rules;
/// Year schedule generation.
pub mod schedule;
/// High-level query facade used by clients.
pub mod service;

pub use cache::*;
pub use config::*;
pub use holiday::*;
pub use model::*;
pub use ports::*;
pub use rules::*;
pub use schedule::*;
pub use service::*;
