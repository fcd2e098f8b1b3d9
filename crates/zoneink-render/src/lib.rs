//! ZoneInk renderer abstraction.
//!
//! The core produces the board snapshot; this crate turns it into an ordered
//! display list of styled paths that any backend can paint. Pure
//! presentation, no decision logic.

pub mod display;
pub mod renderer;

pub use display::{DisplayItem, DisplayList, DisplayListRenderer, Paint, parse_hex_color};
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
