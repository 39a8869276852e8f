pub mod app;
pub mod registry;
pub mod services;
pub mod utils;

pub use app::SplitApp;
pub use registry::{GroupRegistry, Registry, UserRegistry};
