//! Terminal render adapter for the Life engine.
//!
//! The engine draws through the `Surface` trait; this crate supplies a
//! framebuffer that implements it, a layout that puts a status bar above the
//! board, a crossterm backend that flushes frames, and the frame clock that
//! decides when the runner steps.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - One terminal character per surface unit
//! - Diff-based output so steady frames cost little

pub mod clock;
pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use clock::FrameClock;
pub use fb::{FrameBuffer, Glyph, Region, Style, BORDER_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{BoardArea, LifeView, StatusLine, Viewport};
