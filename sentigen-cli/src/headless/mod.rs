mod app;

pub use app::AppHeadless;
