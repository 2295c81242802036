//! Alertbox's core library.
//!
//! This crate holds everything that is independent of how markup is finally
//! encoded:
//! - **Markup tree:** The [`html`] module defines the small element tree that
//!   alerts are built from.
//! - **Alert model:** The [`alert`] module defines the style classification,
//!   the alert configuration and its builder.
//! - **Diagnostics:** The [`diag`] module defines the error and warning types
//!   shared by all crates.

pub mod alert;
pub mod diag;
pub mod html;
