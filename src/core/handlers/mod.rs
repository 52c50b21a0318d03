pub mod commands;
pub mod general;
