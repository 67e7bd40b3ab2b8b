mod config;
mod progress;
mod value;
