//! Vector math and scene rendering for the 2D vector visualiser.
//!
//! The crate computes everything the visualiser shows from two editable
//! vectors, an optional `A ± B` expression, and a set of overlay toggles. The
//! output is an ordered list of pixel-space draw commands plus numeric
//! readouts. A host (the browser canvas via [`engine::Engine`], or the
//! `vecviz` command-line tool) executes those commands verbatim.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`vector`] | `Vector2` and closed-form 2D vector arithmetic |
//! | [`expr`] | `<name><op><name>` expression parsing and evaluation |
//! | [`doc`] | Vector set, overlay flags, derived vectors, readouts |
//! | [`input`] | Component text fields and provisional numeric parsing |
//! | [`camera`] | Pixel points and the data-to-pixel viewport mapping |
//! | [`render`] | Scene rendering into [`render::DrawCommand`]s |
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`paint`] | Executes draw commands on a browser 2D context |
//! | [`consts`] | Shared sizes, arrow geometry, and colors |

pub mod camera;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod expr;
pub mod input;
pub mod paint;
pub mod render;
pub mod vector;
