pub mod element_model;
pub mod noise_filter;
pub mod normalizer;
