mod sections;
mod theme;

pub use sections::{SECTIONS, SectionTracker};
pub use theme::{ListenerId, Theme, ThemeState};
