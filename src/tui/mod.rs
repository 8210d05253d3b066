pub mod app;
pub mod dialog;
pub mod input;
pub mod render;
pub mod row;
pub mod text_input;
pub mod theme;

pub use app::run;
