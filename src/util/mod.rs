//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate pure decision logic from page and component
//! rendering to improve reuse and testability.

pub mod validate;
