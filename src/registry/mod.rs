// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! The option registry and parser facade
//!
//! [`Args`] holds the token sequence, an owned [`Engine`], the ordered
//! registry of descriptors, and the usage configuration. An instance belongs
//! to a single command invocation: register options, parse once, optionally
//! render usage, then drop it to release the slot borrows.

mod usage;

use std::io;

use crate::engine::Engine;
use crate::error::{OptregError, Result};
use crate::opt::{Opt, Slot, Value};

/// A configuration change applicable to an existing facade via
/// [`Args::modify`]. Each variant corresponds to one of the `with_*`
/// builders.
pub enum Modifier<'a> {
    /// Replaces the header line of the usage block
    Usage(String),
    /// Replaces the trailing examples line of the usage block
    Examples(String),
    /// Replaces the owned parsing engine
    Engine(Engine),
    /// Replaces the output sink usage text is written through
    Sink(Box<dyn io::Write + 'a>),
}

/// Option registry and parser facade for one command invocation
pub struct Args<'a> {
    usage: String,
    examples: String,
    tokens: Vec<String>,
    engine: Engine,
    sink: Box<dyn io::Write + 'a>,
    opts: Vec<Opt<'a>>,
}

impl<'a> Args<'a> {
    /// Creates a facade over the given token sequence, typically the process
    /// arguments without the program name. The engine defaults to
    /// [`crate::ErrorPolicy::Report`] and usage output goes to stdout.
    pub fn new(tokens: Vec<String>) -> Self {
        Args {
            usage: String::new(),
            examples: String::new(),
            tokens,
            engine: Engine::default(),
            sink: Box::new(io::stdout()),
            opts: Vec::new(),
        }
    }

    /// Creates a facade over the current process arguments
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1).collect())
    }

    /// Sets the header line of the usage block
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the trailing examples line of the usage block
    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }

    /// Replaces the owned parsing engine, mainly to choose a different
    /// [`crate::ErrorPolicy`]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = engine;
        self
    }

    /// Replaces the output sink that [`Args::get_usage`] writes through
    pub fn with_sink(mut self, sink: impl io::Write + 'a) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Applies several configuration changes at once, after construction
    pub fn modify(&mut self, modifiers: impl IntoIterator<Item = Modifier<'a>>) {
        for modifier in modifiers {
            match modifier {
                Modifier::Usage(usage) => self.usage = usage,
                Modifier::Examples(examples) => self.examples = examples,
                Modifier::Engine(engine) => self.engine = engine,
                Modifier::Sink(sink) => self.sink = sink,
            }
        }
    }

    /// Registers an option by its individual fields. Equivalent to building
    /// the [`Opt`] yourself and calling [`Args::add_opt`].
    pub fn add_var(
        &mut self,
        slot: Slot<'a>,
        long: Option<&str>,
        short: Option<char>,
        default: Value,
        description: &str,
    ) -> Result<()> {
        let mut opt = Opt::from_parts(slot, default).description(description);
        if let Some(short) = short {
            opt = opt.short(short);
        }
        if let Some(long) = long {
            opt = opt.long(long);
        }
        self.add_opt(opt)
    }

    /// Registers a descriptor: validates it, tells the engine about its flag
    /// names, and appends it to the registry. A rejected descriptor occupies
    /// no registry slot and its slot variable is left untouched.
    pub fn add_opt(&mut self, opt: Opt<'a>) -> Result<()> {
        self.validate(&opt)?;
        self.engine.register(&opt);
        tracing::debug!(
            "registered option (short: {:?}, long: {:?}, default: {})",
            opt.short,
            opt.long,
            opt.default
        );
        self.opts.push(opt);
        Ok(())
    }

    /// Parses the stored tokens and writes each descriptor's outcome through
    /// its slot: the flag's value when the flag occurred, the default
    /// otherwise. One-shot; the token sequence does not change between calls.
    pub fn parse(&mut self) -> Result<()> {
        tracing::debug!(
            "parsing {} tokens with {} registered options",
            self.tokens.len(),
            self.opts.len()
        );
        let matches = self.engine.parse(&self.tokens)?;

        for opt in &mut self.opts {
            let Some(id) = opt.flag_id() else {
                opt.store_default();
                continue;
            };
            if let Some(value) = Engine::extract(&matches, &id, opt.slot.kind()) {
                opt.store(&value);
            }
        }

        Ok(())
    }

    fn validate(&self, opt: &Opt<'a>) -> Result<()> {
        if let Some(long) = &opt.long {
            if long.is_empty() || long.starts_with('-') || long.contains(char::is_whitespace) {
                return Err(OptregError::InvalidFlag(long.clone()));
            }
        }
        if let Some(short) = opt.short {
            if short == '-' || short.is_whitespace() {
                return Err(OptregError::InvalidFlag(short.to_string()));
            }
        }

        if opt.default.kind() != opt.slot.kind() {
            return Err(OptregError::TypeMismatch {
                default: opt.default.to_string(),
                expected: opt.slot.kind(),
            });
        }

        // short and long names share a single namespace
        if let Some(short) = opt.short {
            if self.name_taken(&short.to_string()) {
                return Err(OptregError::DuplicateFlag(short.to_string()));
            }
        }
        if let Some(long) = &opt.long {
            if self.name_taken(long) {
                return Err(OptregError::DuplicateFlag(long.clone()));
            }
        }

        Ok(())
    }

    fn name_taken(&self, name: &str) -> bool {
        self.opts.iter().any(|o| {
            o.long.as_deref() == Some(name)
                || o.short.map(String::from).as_deref() == Some(name)
        })
    }

    pub(crate) fn opts(&self) -> &[Opt<'a>] {
        &self.opts
    }

    pub(crate) fn usage_header(&self) -> &str {
        &self.usage
    }

    pub(crate) fn examples_text(&self) -> &str {
        &self.examples
    }
}
