pub mod patterns;
pub mod stability;
pub mod strategy;
