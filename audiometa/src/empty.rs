//! Deciding whether a property value counts as empty

use crate::items::Timestamp;
use crate::property::Value;

use std::ops::{BitAnd, BitOr};

macro_rules! define_flags {
	([
		$(
			$(#[$meta:meta])?
			$name:ident => $shift:literal
		),+
	]) => {
		impl EmptyFlags {
			$(
				$(#[$meta])?
				#[allow(missing_docs)]
				pub const $name: Self = Self(1 << $shift);
			)+
		}
	};
}

/// The kinds of value [`is_empty`] treats as empty
///
/// Flags combine with `|`. [`EmptyFlags::ALL`] is what every bulk operation uses.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(transparent)]
pub struct EmptyFlags(pub(crate) u32);

define_flags! {
	[
		/// Nothing counts as empty
		NONE       => 0,
		/// An absent value
		NULL       => 1,
		/// The integer `0`
		INT        => 2,
		/// The float `0.0`
		FLOAT      => 3,
		/// Reserved, no property holds a double
		DOUBLE     => 4,
		/// The empty string
		STRING     => 5,
		/// [`Timestamp::MIN`]
		DATE_TIME  => 6,
		/// Lyrics with no text and no timed phrases
		LYRICS     => 7,
		/// Chapter lists, picture lists and extension maps with no entries
		ENUMERABLE => 8
	]
}

impl EmptyFlags {
	/// Every kind
	pub const ALL: Self = Self(u32::MAX);

	/// The bit mask
	#[must_use]
	pub const fn bits(self) -> u32 {
		self.0
	}

	/// Whether every flag in `other` is set
	#[must_use]
	pub const fn contains(self, other: Self) -> bool {
		self.0 & other.0 == other.0
	}
}

impl Default for EmptyFlags {
	fn default() -> Self {
		Self::ALL
	}
}

impl BitOr for EmptyFlags {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self {
		Self(self.0 | rhs.0)
	}
}

impl BitAnd for EmptyFlags {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self {
		Self(self.0 & rhs.0)
	}
}

/// Whether `value` is empty, with `flags` selecting which kinds may be
///
/// Enum values are never empty.
///
/// # Examples
///
/// ```rust
/// use audiometa::empty::{EmptyFlags, is_empty};
/// use audiometa::property::Value;
///
/// assert!(is_empty(None, EmptyFlags::ALL));
/// assert!(is_empty(Some(&Value::Int(0)), EmptyFlags::ALL));
/// assert!(!is_empty(Some(&Value::Int(0)), EmptyFlags::NULL | EmptyFlags::STRING));
/// assert!(!is_empty(Some(&Value::from("Abbey Road")), EmptyFlags::ALL));
/// ```
pub fn is_empty(value: Option<&Value>, flags: EmptyFlags) -> bool {
	let Some(value) = value else {
		return flags.contains(EmptyFlags::NULL);
	};

	match value {
		Value::String(s) => s.is_empty() && flags.contains(EmptyFlags::STRING),
		Value::Int(i) => *i == 0 && flags.contains(EmptyFlags::INT),
		Value::Float(f) => *f == 0.0 && flags.contains(EmptyFlags::FLOAT),
		Value::DateTime(timestamp) => {
			*timestamp == Timestamp::MIN && flags.contains(EmptyFlags::DATE_TIME)
		},
		Value::Lyrics(lyrics) => lyrics.is_empty() && flags.contains(EmptyFlags::LYRICS),
		Value::Chapters(chapters) => chapters.is_empty() && flags.contains(EmptyFlags::ENUMERABLE),
		Value::Pictures(pictures) => pictures.is_empty() && flags.contains(EmptyFlags::ENUMERABLE),
		Value::Map(map) => map.is_empty() && flags.contains(EmptyFlags::ENUMERABLE),
		Value::Compilation(_) | Value::MediaType(_) | Value::PlayGap(_) => false,
	}
}
