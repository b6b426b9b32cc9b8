// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! Usage rendering
//!
//! Builds the aligned help block from the registry, in insertion order. The
//! short and long columns are each padded to the registry-wide maximum width
//! so descriptions line up; a descriptor missing one of its flags gets blank
//! padding of the same width.

use std::fmt::Write as _;
use std::io::Write as _;

use super::Args;

impl Args<'_> {
    /// Renders the usage block as a string: header, an `Options:` marker when
    /// any option is registered, one aligned line per descriptor, and the
    /// trailing examples text when set. Defaults are appended to the
    /// description as `(default: value)` unless the default is empty text.
    pub fn render_usage(&self) -> String {
        let opts = self.opts();
        // shorts are single chars, so their column is one wide when present
        let max_short = usize::from(opts.iter().any(|o| o.short.is_some()));
        let max_long = opts
            .iter()
            .filter_map(|o| o.long.as_ref().map(|l| l.len()))
            .max()
            .unwrap_or(0);

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.usage_header());

        if !opts.is_empty() {
            out.push_str("Options:\n");
        }

        for opt in opts {
            let short = match opt.short {
                Some(c) => format!("-{c:<max_short$}"),
                None => " ".repeat(max_short + 1),
            };
            let long = match &opt.long {
                Some(l) => format!("--{l:<max_long$}"),
                None => " ".repeat(max_long + 2),
            };

            let mut description = opt.description.clone();
            if !opt.default.is_empty_text() {
                let _ = write!(description, " (default: {})", opt.default);
            }

            let _ = writeln!(out, "    {short}    {long}    {description}");
        }

        if !self.examples_text().is_empty() {
            let _ = writeln!(out, "{}", self.examples_text());
        }

        out
    }

    /// Writes the rendered usage block through the configured sink. Sink
    /// write failures are ignored, as they would be for stdout.
    pub fn get_usage(&mut self) {
        let text = self.render_usage();
        let _ = self.sink.write_all(text.as_bytes());
        let _ = self.sink.flush();
    }
}
