pub mod app;
pub mod html;
pub mod text;
pub mod ui;

pub use app::App;
