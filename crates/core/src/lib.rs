//! Maps a normalized scroll-progress signal onto a single, flicker-resistant
//! active section index.
//!
//! ```text
//!   scroll/observer ──▶ progress (0..1) ──▶ ActiveSectionResolver ──▶ ActiveIndex ──▶ highlight styling
//!      (host)                                  (this crate)                           (host)
//! ```
//!
//! Nothing here touches a UI runtime; the host measures scroll position and
//! renders the result.

pub mod batch;
pub mod config;
pub mod layout;
pub mod resolver;

pub use batch::FrameBatcher;
pub use config::{ConfigError, ResolverConfig};
pub use layout::{LayoutError, SectionLayout, SectionSpan};
pub use resolver::{ActiveSectionResolver, ResolverError};
pub use scrollspy_protocol::{ActiveChange, ActiveIndex, SectionHighlight};
