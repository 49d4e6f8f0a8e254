pub mod labels;
pub mod payload;
pub mod text;
pub mod xcstrings;
