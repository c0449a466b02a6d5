pub mod config;
pub mod map;
pub mod metadata;
pub mod publish;
