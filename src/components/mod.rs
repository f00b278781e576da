//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome and interaction surfaces while reading
//! and writing state owned by the page that mounts them.

pub mod feedback_form;
