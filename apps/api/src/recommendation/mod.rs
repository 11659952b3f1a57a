//! Skill recommendation — static role tables plus the matching/scoring engine.

pub mod engine;
pub mod handlers;
pub mod tables;
