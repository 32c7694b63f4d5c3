//! # Tix Architecture
//!
//! Tix is a **UI-agnostic rendering library** for ticket-tracking data. This
//! is not a CLI application that happens to have some library code—it's a
//! library that happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, reads records, writes to stdout        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Rendering Layer (render/)                                  │
//! │  - Pure functions from records + config to strings          │
//! │  - No I/O, no globals mutated, safe to call concurrently    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Layout Engine (linotype crate)                             │
//! │  - Styled spans, column alignment, progress bars, wrapping  │
//! │  - All math on display widths, never on rendered bytes      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Records In, Strings Out
//!
//! The tracker's HTTP client, authentication and session handling live
//! elsewhere. From this crate's perspective they are producers of plain
//! [`model`] records; everything here transforms those records into
//! terminal text and returns it. Rendering never fails on valid-shaped
//! input: unknown statuses fall back to unstyled text, missing optional
//! fields skip their sections, and an empty subtask list renders an empty
//! progress gauge.
//!
//! ## Module Overview
//!
//! - [`model`]: Domain records (`Issue`, `Comment`, `User`, `Status`)
//! - [`render`]: The `Printer` and its color `Palette`
//! - [`config`]: Render configuration and the persisted config file
//! - [`error`]: Error types for the I/O boundary

pub mod config;
pub mod error;
pub mod model;
pub mod render;
