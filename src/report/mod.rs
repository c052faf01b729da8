pub mod console;
pub mod markdown;
pub mod page_object;
pub mod report_model;
