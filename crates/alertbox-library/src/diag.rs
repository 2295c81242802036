//! Diagnostics.

use std::fmt::{self, Display, Formatter};

use ecow::{EcoString, EcoVec};

#[doc(inline)]
pub use ecow::eco_format;

#[doc(hidden)]
pub use crate::__bail as bail;

/// Early-return with a [`StrResult`].
///
/// The arguments are formatted like with `format!` and turned into the error
/// message.
///
/// ```ignore
/// bail!("attribute name `{name}` is not allowed");
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        return Err($crate::diag::eco_format!($fmt, $($arg),*).into())
    };

    ($error:expr) => {
        return Err($error.into())
    };
}

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

/// A configuration that cannot be rendered.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum ConfigError {
    /// A style name outside of the known set.
    UnknownStyle(EcoString),
    /// An attribute name that cannot appear in a start tag.
    InvalidAttrName(EcoString),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownStyle(name) => write!(
                f,
                "unknown alert style `{name}` (expected one of default, success, warning, info)"
            ),
            Self::InvalidAttrName(name) if name.is_empty() => {
                f.write_str("attribute name must not be empty")
            }
            Self::InvalidAttrName(name) => {
                write!(f, "`{}` is not a valid attribute name", name.escape_debug())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for EcoString {
    fn from(error: ConfigError) -> Self {
        eco_format!("{error}")
    }
}

/// A non-fatal observation made while building or rendering an alert.
///
/// Warnings never change the produced markup.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Warning {
    /// The warning message.
    pub message: EcoString,
}

impl Warning {
    /// Create a new warning from a message.
    pub fn new(message: impl Into<EcoString>) -> Self {
        Self { message: message.into() }
    }
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Create a [`Warning`] with a formatted message.
#[macro_export]
#[doc(hidden)]
macro_rules! __warning {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::diag::Warning::new($crate::diag::eco_format!($fmt, $($arg),*))
    };
}

#[doc(hidden)]
pub use crate::__warning as warning;

/// Collects warnings emitted during rendering.
#[derive(Debug, Default, Clone)]
pub struct Sink {
    warnings: EcoVec<Warning>,
}

impl Sink {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a warning, dropping exact duplicates.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{warning}");
        if !self.warnings.contains(&warning) {
            self.warnings.push(warning);
        }
    }

    /// The warnings collected so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consume the sink, returning the collected warnings.
    pub fn into_warnings(self) -> EcoVec<Warning> {
        self.warnings
    }

    /// Whether no warnings were collected.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
