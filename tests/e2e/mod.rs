pub mod display_width;
pub mod editing;
pub mod save_load;
pub mod scrolling;
