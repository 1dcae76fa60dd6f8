pub mod app;
pub mod form;
pub mod theme;

pub use app::App;
