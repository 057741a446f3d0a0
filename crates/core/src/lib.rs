//! # veneer-core
//!
//! Platform-agnostic behavior logic for the veneer page-enhancement layer:
//! - **scrollspy**: which page section owns the current scroll position
//! - **contact**: contact-form field validation and user-facing messages
//! - **notice**: notification categories and their style hooks
//! - **lazy**: support values for deferred image loading
//! - **options**: tunable knobs shared by every behavior
//!
//! ## Design Principle
//!
//! This crate has **no browser dependency**: no `web-sys`, no `wasm-bindgen`,
//! no DOM types. Everything here is plain data and pure functions, so the
//! whole crate is exercised with ordinary `cargo test` on the host. The
//! `veneer-wasm` crate owns event wiring, timers, and element mutation and
//! feeds measurements into these functions.

pub mod contact;
pub mod lazy;
pub mod notice;
pub mod options;
pub mod scrollspy;

pub use contact::{ContactError, ContactSubmission};
pub use notice::NoticeKind;
pub use options::EnhanceOptions;
pub use scrollspy::{SectionSpan, active_section};
