pub mod engine;
pub mod fallback;
pub mod group_model;
