mod app;
mod archive;
mod fetch;
mod misc;

pub use app::App;
