//! Contains the errors that can arise within audiometa
//!
//! The primary error is [`MetadataError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::property::{Property, ValueKind};

use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, MetadataError>`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Property related errors
	/// A property name that is not part of the vocabulary
	UnknownProperty(String),
	/// A value was assigned to a property of a different [`ValueKind`]
	ValueKindMismatch {
		/// The property being written
		property: Property,
		/// The kind the property requires
		expected: ValueKind,
	},
	/// A numeric code or name that does not belong to an iTunes enumeration
	UnknownEnumValue(String),

	// Record related errors
	/// Attempted to save a record that was never associated with a path
	NoPath,

	// Item related errors
	/// Arises when decoding OR encoding a problematic [`Timestamp`](crate::items::Timestamp)
	BadTimestamp(&'static str),
	/// Provided an invalid picture
	NotAPicture,

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within audiometa
pub struct MetadataError {
	pub(crate) kind: ErrorKind,
}

impl MetadataError {
	/// Create a `MetadataError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::error::{ErrorKind, MetadataError};
	///
	/// let no_path = MetadataError::new(ErrorKind::NoPath);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::error::{ErrorKind, MetadataError};
	///
	/// let no_path = MetadataError::new(ErrorKind::NoPath);
	/// if let ErrorKind::NoPath = no_path.kind() {
	/// 	println!("Where should this go?");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for MetadataError {}

impl Debug for MetadataError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for MetadataError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for MetadataError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::UnknownProperty(ref name) => write!(f, "Unknown property: \"{name}\""),
			ErrorKind::ValueKindMismatch { property, expected } => write!(
				f,
				"Attempted to assign a value to `{property}`, which expects a value of kind {expected:?}"
			),
			ErrorKind::UnknownEnumValue(ref value) => {
				write!(f, "\"{value}\" is not a member of the enumeration")
			},
			ErrorKind::NoPath => write!(f, "Attempted to save a record with no path"),
			ErrorKind::BadTimestamp(message) => {
				write!(f, "Encountered an invalid timestamp: {message}")
			},
			ErrorKind::NotAPicture => write!(f, "Picture: Encountered invalid data"),
		}
	}
}
