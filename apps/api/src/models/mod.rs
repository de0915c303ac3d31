pub mod project;
pub mod skill;
