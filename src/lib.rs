//! Infinite pinboard canvas for the community bulletin board.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! camera over an unbounded logical plane, turns raw DOM input into pan/zoom
//! updates, places every post card deterministically from its identity and
//! position, and draws the result. Persistence, sign-in and text generation
//! live in the host; they reach the engine as plain post snapshots and leave it
//! as [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`feed`] | Displayed post sequence, feed status and placement cache |
//! | [`post`] | Post records and the draft composer |
//! | [`layout`] | Deterministic card placement and color themes |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing screen points against rotated cards |
//! | [`scene`] | Render model built from feed and camera |
//! | [`render`] | Canvas2D drawing of a scene |
//! | [`config`] | Board tunables with JSON/env overrides |
//! | [`prompt`] | Prompts handed to the text-generation host |
//! | [`consts`] | Shared numeric constants (grid, zoom limits, sensitivities) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod feed;
pub mod hit;
pub mod input;
pub mod layout;
pub mod post;
pub mod prompt;
pub mod render;
pub mod scene;
