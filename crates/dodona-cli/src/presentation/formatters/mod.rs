pub mod bar;
pub mod number;
pub mod text;
