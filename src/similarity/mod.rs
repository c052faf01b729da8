pub mod comparator;
pub mod scorer;
pub mod similarity_model;
