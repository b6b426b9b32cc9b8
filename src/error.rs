// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! Error types for Optreg
//!
//! Registration and parsing surface descriptive errors to the caller; nothing
//! in this crate terminates the process unless the engine is explicitly
//! configured with [`crate::ErrorPolicy::Exit`].

use thiserror::Error;

use crate::opt::Kind;

/// Main error type for Optreg operations
#[derive(Error, Debug)]
pub enum OptregError {
    /// The default value's type does not match the bound slot's type
    #[error("default value {default} should have been of type {expected}")]
    TypeMismatch {
        /// Display form of the offending default
        default: String,
        /// The kind the slot requires
        expected: Kind,
    },

    /// A short or long flag name is already taken by another descriptor
    #[error("flag {0:?} is already registered")]
    DuplicateFlag(String),

    /// A flag name is empty, starts with a dash, or contains whitespace
    #[error("invalid flag name {0:?}")]
    InvalidFlag(String),

    /// The engine rejected the token sequence
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type alias for Optreg operations
pub type Result<T> = std::result::Result<T, OptregError>;
