mod context;

pub mod config;
pub mod progress;
pub mod value;

pub use context::HandlerContext;
