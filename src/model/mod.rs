pub mod description;
pub mod labels;
pub mod payload;
