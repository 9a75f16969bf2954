//! Design tokens derived from a generated theme
//!
//! - Per-color records (`argb`, `rgba`, `hex`)
//! - CSS custom properties and Tailwind declarations
//! - Runtime stylesheets with light and dark blocks
//! - Variable references for utility framework configs
//! - State-layer opacity

mod format;
mod opacity;
mod property;
mod reference;
mod stylesheet;

pub use format::*;
pub use opacity::*;
pub use property::*;
pub use reference::*;
pub use stylesheet::*;
