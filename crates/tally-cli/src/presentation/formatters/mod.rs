pub mod style;

pub use style::{accent, gauge, muted, sized};
