pub mod milestone;
pub mod roadmap;
pub mod skill;
