pub mod chain;
pub mod profile;
