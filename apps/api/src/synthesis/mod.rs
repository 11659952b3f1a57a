//! Milestone synthesis — template library plus the personalization pipeline.

pub mod handlers;
pub mod resources;
pub mod synthesizer;
pub mod templates;
