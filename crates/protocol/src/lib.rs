pub mod highlight;
pub mod theme;
pub mod types;

pub use highlight::{SectionHighlight, highlights};
pub use theme::ThemeToken;
pub use types::{ActiveChange, ActiveIndex, InvalidActiveIndex};
