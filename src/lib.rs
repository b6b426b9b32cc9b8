// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! Optreg - a thin option-registry facade over a flag-parsing engine.
//!
//! Callers register named options (short flag, long flag, typed default,
//! description) bound to caller-owned variable slots, parse a token sequence
//! into those slots, and render an aligned usage block. Token parsing itself
//! is delegated to clap's builder API; this crate is glue:
//! - `opt`: descriptors, typed defaults, and the borrowed output slots
//! - `engine`: the clap-backed parsing engine and its error policy
//! - `registry`: the `Args` facade tying tokens, engine, and options together
//!
//! ```
//! use optreg::{Args, Opt};
//!
//! let mut target = String::new();
//! let mut args = Args::new(vec!["--target=prod".into()]);
//! args.add_opt(
//!     Opt::text(&mut target, "dev")
//!         .short('t')
//!         .long("target")
//!         .description("Deployment target"),
//! )?;
//! args.parse()?;
//! drop(args);
//! assert_eq!(target, "prod");
//! # Ok::<(), optreg::OptregError>(())
//! ```

pub mod engine;
pub mod error;
pub mod opt;
pub mod registry;

pub use engine::{Engine, ErrorPolicy};
pub use error::{OptregError, Result};
pub use opt::{Kind, Opt, Slot, Value};
pub use registry::{Args, Modifier};
