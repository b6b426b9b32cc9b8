// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Optreg Contributors

//! Option descriptors
//!
//! An [`Opt`] bundles a borrowed output slot, a typed default, a description,
//! and the flag names a token can invoke it by. Supported bindings form a
//! closed set: text, boolean, and integer. A slot of any other type is
//! unrepresentable, so there is no runtime type dispatch anywhere in the
//! crate.

use std::fmt;

/// The kind of value an option carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Boolean,
    Integer,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Text => write!(f, "string"),
            Kind::Boolean => write!(f, "bool"),
            Kind::Integer => write!(f, "int"),
        }
    }
}

/// A typed default value for an option
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Boolean(bool),
    Integer(i64),
}

impl Value {
    /// The kind this value belongs to
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
        }
    }

    /// True only for the empty text value, which gets no usage suffix
    pub(crate) fn is_empty_text(&self) -> bool {
        matches!(self, Value::Text(s) if s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Integer(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

/// A caller-owned variable the engine writes parsed values into.
///
/// The borrow lasts as long as the facade, so the variable is readable again
/// once the facade is dropped.
#[derive(Debug)]
pub enum Slot<'a> {
    Text(&'a mut String),
    Boolean(&'a mut bool),
    Integer(&'a mut i64),
}

impl Slot<'_> {
    /// The kind this slot accepts
    pub fn kind(&self) -> Kind {
        match self {
            Slot::Text(_) => Kind::Text,
            Slot::Boolean(_) => Kind::Boolean,
            Slot::Integer(_) => Kind::Integer,
        }
    }
}

/// A registered option: output slot, default, description, and flag names
#[derive(Debug)]
pub struct Opt<'a> {
    pub slot: Slot<'a>,
    pub default: Value,
    pub description: String,
    pub short: Option<char>,
    pub long: Option<String>,
}

impl<'a> Opt<'a> {
    /// A text option writing into `slot`, falling back to `default`
    pub fn text(slot: &'a mut String, default: impl Into<String>) -> Self {
        Self::from_parts(Slot::Text(slot), Value::Text(default.into()))
    }

    /// A boolean option. A bare flag token sets the slot to `true`;
    /// `--name=false` sets it explicitly.
    pub fn boolean(slot: &'a mut bool, default: bool) -> Self {
        Self::from_parts(Slot::Boolean(slot), Value::Boolean(default))
    }

    /// An integer option
    pub fn integer(slot: &'a mut i64, default: i64) -> Self {
        Self::from_parts(Slot::Integer(slot), Value::Integer(default))
    }

    /// Builds a descriptor from an independently chosen slot and default.
    ///
    /// Unlike the typed constructors this can pair mismatched kinds; the
    /// registry validates kind equality before accepting the descriptor.
    pub fn from_parts(slot: Slot<'a>, default: Value) -> Self {
        Opt {
            slot,
            default,
            description: String::new(),
            short: None,
            long: None,
        }
    }

    /// Sets the single-character flag name
    pub fn short(mut self, short: char) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets the multi-character flag name
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Sets the human-readable description shown in usage output
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The engine-side identifier: the long name when present, else the
    /// short name. `None` when the descriptor has no flags at all.
    pub(crate) fn flag_id(&self) -> Option<String> {
        self.long
            .clone()
            .or_else(|| self.short.map(|c| c.to_string()))
    }

    /// Writes a parsed value through the slot
    pub(crate) fn store(&mut self, value: &Value) {
        let slot_kind = self.slot.kind();
        match (&mut self.slot, value) {
            (Slot::Text(slot), Value::Text(v)) => **slot = v.clone(),
            (Slot::Boolean(slot), Value::Boolean(v)) => **slot = *v,
            (Slot::Integer(slot), Value::Integer(v)) => **slot = *v,
            // kind equality is validated at registration
            _ => debug_assert!(
                false,
                "value of kind {} written to {slot_kind} slot",
                value.kind()
            ),
        }
    }

    /// Writes the default through the slot. Used for descriptors the engine
    /// never sees because they carry no flag names.
    pub(crate) fn store_default(&mut self) {
        let default = self.default.clone();
        self.store(&default);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Text.to_string(), "string");
        assert_eq!(Kind::Boolean.to_string(), "bool");
        assert_eq!(Kind::Integer.to_string(), "int");
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("x").kind(), Kind::Text);
        assert_eq!(Value::from(true).kind(), Kind::Boolean);
        assert_eq!(Value::from(7i64).kind(), Kind::Integer);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("hello").to_string(), "hello");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(-3i64).to_string(), "-3");
    }

    #[test]
    fn test_empty_text_detection() {
        assert!(Value::from("").is_empty_text());
        assert!(!Value::from("x").is_empty_text());
        assert!(!Value::from(false).is_empty_text());
    }

    #[test]
    fn test_slot_kind() {
        let mut s = String::new();
        let mut b = false;
        let mut i = 0i64;
        assert_eq!(Slot::Text(&mut s).kind(), Kind::Text);
        assert_eq!(Slot::Boolean(&mut b).kind(), Kind::Boolean);
        assert_eq!(Slot::Integer(&mut i).kind(), Kind::Integer);
    }

    #[test]
    fn test_typed_constructor_builder() {
        let mut v = String::new();
        let opt = Opt::text(&mut v, "default")
            .short('a')
            .long("append")
            .description("Some description");
        assert_eq!(opt.short, Some('a'));
        assert_eq!(opt.long.as_deref(), Some("append"));
        assert_eq!(opt.default, Value::from("default"));
        assert_eq!(opt.description, "Some description");
    }

    #[test]
    fn test_flag_id_prefers_long() {
        let mut v = String::new();
        let opt = Opt::text(&mut v, "").short('a').long("append");
        assert_eq!(opt.flag_id().as_deref(), Some("append"));
    }

    #[test]
    fn test_flag_id_short_only() {
        let mut v = false;
        let opt = Opt::boolean(&mut v, false).short('a');
        assert_eq!(opt.flag_id().as_deref(), Some("a"));
    }

    #[test]
    fn test_flag_id_none_without_flags() {
        let mut v = 0i64;
        let opt = Opt::integer(&mut v, 1);
        assert!(opt.flag_id().is_none());
    }

    #[test]
    fn test_store_default() {
        let mut v = 0i64;
        let mut opt = Opt::integer(&mut v, 42);
        opt.store_default();
        drop(opt);
        assert_eq!(v, 42);
    }
}
