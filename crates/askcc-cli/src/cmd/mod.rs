pub mod agent;
pub mod install;
