//! Rendering of a [`MultiError`] into text.
//!
//! A [`Formatter`] is anything that turns a composite error into a `String`.
//! The stock implementation is [`FormatConfig`], a `{message, marker, indent}`
//! triple that renders
//!
//! ```text
//! <message>
//! <indent><marker><error 1>
//! <indent><marker><error 2>
//! ```
//!
//! with no trailing newline. Closures of type `Fn(&MultiError) -> String` are
//! formatters too, which is the usual way to plug in a machine-readable layout.

use crate::types::MultiError;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Preamble written before the list of errors.
pub const DEFAULT_MESSAGE: &str = "errors found:";
/// Per-entry marker used by [`FormatConfig::default`] and [`FormatBuilder`].
pub const DEFAULT_MARKER: &str = "- ";
/// Indentation written before every entry marker.
pub const DEFAULT_INDENT: &str = "  ";
/// Marker of [`DEFAULT_FORMAT`].
pub const DEFAULT_FORMAT_MARKER: &str = "✔ ";

/// Formatter installed on every [`Collector::new`](crate::Collector::new).
///
/// ```
/// use error_fanin::{Collector, DEFAULT_FORMAT};
///
/// let collector = Collector::with_fallback(DEFAULT_FORMAT);
/// collector.register("1");
/// assert_eq!(collector.finalize().unwrap().to_string(), "errors found:\n  ✔ 1");
/// ```
pub const DEFAULT_FORMAT: FormatConfig = FormatConfig {
    message: Cow::Borrowed(DEFAULT_MESSAGE),
    marker: Cow::Borrowed(DEFAULT_FORMAT_MARKER),
    indent: Cow::Borrowed(DEFAULT_INDENT),
};

/// Turns a [`MultiError`] into its display string.
///
/// Implementations must be pure: the same composite always renders to the
/// same text. Formatters are shared between threads through the collector,
/// hence the `Send + Sync` bound.
pub trait Formatter: Send + Sync {
    fn format(&self, error: &MultiError) -> String;
}

impl<F> Formatter for F
where
    F: Fn(&MultiError) -> String + Send + Sync,
{
    #[inline]
    fn format(&self, error: &MultiError) -> String {
        self(error)
    }
}

/// Configuration-based formatter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    pub message: Cow<'static, str>,
    pub marker: Cow<'static, str>,
    pub indent: Cow<'static, str>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_MESSAGE),
            marker: Cow::Borrowed(DEFAULT_MARKER),
            indent: Cow::Borrowed(DEFAULT_INDENT),
        }
    }
}

impl FormatConfig {
    /// Starts a [`FormatBuilder`] seeded with the compiled-in defaults.
    #[inline]
    pub fn builder() -> FormatBuilder {
        FormatBuilder::new()
    }
}

impl Formatter for FormatConfig {
    fn format(&self, error: &MultiError) -> String {
        let mut out = String::with_capacity(self.message.len() + error.len() * 32);
        out.push_str(&self.message);
        for item in error.iter() {
            out.push('\n');
            out.push_str(&self.indent);
            out.push_str(&self.marker);
            let _ = write!(out, "{}", item);
        }
        out
    }
}

/// Builder for [`FormatConfig`].
///
/// Every `build` hands out the configured formatter and resets the builder to
/// the compiled-in defaults, so one builder can produce several unrelated
/// formatters without leaking settings between them.
///
/// # Examples
///
/// ```
/// use error_fanin::{FormatBuilder, DEFAULT_MARKER};
///
/// let mut builder = FormatBuilder::new();
/// let arrows = builder.marker("-> ").indent("").must_build();
/// assert_eq!(arrows.marker, "-> ");
///
/// let plain = builder.must_build();
/// assert_eq!(plain.marker, DEFAULT_MARKER);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormatBuilder {
    config: FormatConfig,
}

impl FormatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&mut self, message: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.message = message.into();
        self
    }

    pub fn marker(&mut self, marker: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.marker = marker.into();
        self
    }

    pub fn indent(&mut self, indent: impl Into<Cow<'static, str>>) -> &mut Self {
        self.config.indent = indent.into();
        self
    }

    /// Produces the configured formatter and resets the builder.
    ///
    /// Any triple of strings is a valid configuration, so this never fails;
    /// the `Result` keeps the signature open for validating builders.
    pub fn build(&mut self) -> Result<FormatConfig, Infallible> {
        Ok(core::mem::take(&mut self.config))
    }

    /// Like [`build`](Self::build), for call sites that know the configuration is valid.
    pub fn must_build(&mut self) -> FormatConfig {
        match self.build() {
            Ok(config) => config,
            Err(never) => match never {},
        }
    }
}
