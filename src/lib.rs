//! Shellkit
//!
//! Interactive command shells and one-shot command lines built from a
//! declarative registry of commands, options and wizards.
//!
//! This crate re-exports [`shellkit_core`]; see the `shellkit-cli` crate for
//! a terminal host.

pub use shellkit_core::*;
