//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, filter and projection calls into interaction-level
//!   APIs for the presentation layer.
//! - Keep rendering code decoupled from core state details.

pub mod session;
