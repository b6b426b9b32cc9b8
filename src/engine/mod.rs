// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! The delegated flag-parsing engine
//!
//! Token parsing is not implemented here; it is handed to clap's builder
//! API. The engine accumulates one `clap::Arg` per registered descriptor and
//! assembles a throwaway `clap::Command` when asked to parse. Both flag
//! names of a descriptor land on the same `Arg`, so when a short and a long
//! occurrence of the same option both appear in the tokens, the later one
//! wins.
//!
//! Every facade owns its engine instance; there is no process-wide default.

use clap::{Arg, ArgAction, ArgMatches};

use crate::error::{OptregError, Result};
use crate::opt::{Kind, Opt, Value};

/// What the engine does when the token sequence is rejected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return a descriptive [`OptregError::Parse`] to the caller
    #[default]
    Report,
    /// Print the engine's diagnostic and terminate the process with a
    /// non-zero status
    Exit,
}

/// Clap-backed parsing engine with a configurable error policy
#[derive(Debug, Default)]
pub struct Engine {
    args: Vec<Arg>,
    policy: ErrorPolicy,
}

impl Engine {
    pub fn new(policy: ErrorPolicy) -> Self {
        Engine {
            args: Vec::new(),
            policy,
        }
    }

    /// Tells the engine to recognize the descriptor's flag names and seeds
    /// its default. Descriptors without any flag name are not the engine's
    /// business and must not be passed here.
    pub(crate) fn register(&mut self, opt: &Opt<'_>) {
        let Some(id) = opt.flag_id() else {
            return;
        };

        let mut arg = Arg::new(id)
            .action(ArgAction::Set)
            .help(opt.description.clone())
            .default_value(opt.default.to_string());

        if let Some(short) = opt.short {
            arg = arg.short(short);
        }
        if let Some(long) = &opt.long {
            arg = arg.long(long.clone());
        }

        arg = match opt.default.kind() {
            Kind::Text => arg,
            // a bare `-a` means true, `-a=false` is explicit
            Kind::Boolean => arg
                .value_parser(clap::value_parser!(bool))
                .num_args(0..=1)
                .require_equals(true)
                .default_missing_value("true"),
            Kind::Integer => arg.value_parser(clap::value_parser!(i64)),
        };

        self.args.push(arg);
    }

    /// Parses the token sequence against everything registered so far.
    ///
    /// Unknown flags and failed value conversions are rejections; how a
    /// rejection surfaces depends on the configured [`ErrorPolicy`].
    pub(crate) fn parse(&self, tokens: &[String]) -> Result<ArgMatches> {
        tracing::debug!(
            "engine parsing {} tokens against {} flags",
            tokens.len(),
            self.args.len()
        );

        let command = clap::Command::new("optreg")
            .no_binary_name(true)
            .disable_help_flag(true)
            .disable_version_flag(true)
            // repeated occurrences of one option overwrite, they are not an error
            .args_override_self(true)
            .args(self.args.iter().cloned());

        match command.try_get_matches_from(tokens) {
            Ok(matches) => Ok(matches),
            Err(err) => match self.policy {
                ErrorPolicy::Report => Err(OptregError::Parse(err.to_string())),
                ErrorPolicy::Exit => err.exit(),
            },
        }
    }

    /// Reads a parsed value matching the descriptor's kind, or the seeded
    /// default when the flag never occurred in the tokens.
    pub(crate) fn extract(matches: &ArgMatches, id: &str, kind: Kind) -> Option<Value> {
        match kind {
            Kind::Text => matches
                .get_one::<String>(id)
                .map(|v| Value::Text(v.clone())),
            Kind::Boolean => matches.get_one::<bool>(id).map(|v| Value::Boolean(*v)),
            Kind::Integer => matches.get_one::<i64>(id).map(|v| Value::Integer(*v)),
        }
    }
}
