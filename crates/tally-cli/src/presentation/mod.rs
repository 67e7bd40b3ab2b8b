//! # Presentation Layer
//!
//! Adaptation of the MVVM pattern used for all command output.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                ==(Text)==> [ View ]
//! ```
//!
//! * `view_models/`: serializable data contracts, raw values only.
//! * `presenters/`: turn rendered components and config into view models,
//!   attaching badges and suggestions.
//! * `views/`: `fmt::Display` layouts, one per view model, driven by
//!   [`ViewOptions`].
//! * `renderers/`: the console driver choosing JSON or text.
//! * `formatters/`: small styling helpers shared by views.
//!
//! JSON output always carries the full view model; [`ViewMode`] only
//! affects text layout.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, ViewMode, ViewOptions};
