//! Core business logic - framework-agnostic selection, rating and profile
//! operations. Everything here takes a database connection and explicit
//! configuration; no module reads ambient state.

/// Application lifecycle - creation and review-status transitions
pub mod application;
/// Role/action authorization policy table
pub mod authz;
/// Pure education eligibility rule
pub mod eligibility;
/// Profile-store operations - registration, scores, history replacement
pub mod profile;
/// Candidate rating over qualified profiles
pub mod rating;
/// Recommendation flag evaluation and persistence
pub mod recommendation;
/// Selection-round finalization
pub mod selection;
/// Aggregate dashboard statistics
pub mod statistics;
