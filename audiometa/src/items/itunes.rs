//! iTunes-specific enumerations
//!
//! These are stored in extension fields as their numeric code (ex. `stik` = `"2"` for an audiobook).
//! When reading, both the numeric code and the variant name are accepted.

use crate::error::{ErrorKind, MetadataError, Result};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

// Usage:
//
// itunes_enum! {
//     /// Docs
//     Name {
//         Variant => code,
//     }
// }
//
// Generates the enum along with `code()`, `from_code()`, `name()`, `from_name()`,
// and the `FromStr`/`Display` implementations.
macro_rules! itunes_enum {
	(
		$(#[$meta:meta])*
		$name:ident {
			$($variant:ident => $code:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
		#[allow(missing_docs)]
		pub enum $name {
			$($variant),+
		}

		impl $name {
			/// All variants, in ascending code order
			pub const ALL: &'static [Self] = &[$(Self::$variant),+];

			/// The numeric code stored in tags
			pub const fn code(self) -> u8 {
				match self {
					$(Self::$variant => $code),+
				}
			}

			/// Get a variant from its numeric code
			pub fn from_code(code: i64) -> Option<Self> {
				match code {
					$($code => Some(Self::$variant),)+
					_ => None,
				}
			}

			/// The canonical variant name
			pub const fn name(self) -> &'static str {
				match self {
					$(Self::$variant => stringify!($variant)),+
				}
			}

			/// Get a variant from its name, ignoring case
			pub fn from_name(name: &str) -> Option<Self> {
				Self::ALL.iter().copied().find(|v| v.name().eq_ignore_ascii_case(name))
			}
		}

		impl FromStr for $name {
			type Err = MetadataError;

			fn from_str(s: &str) -> Result<Self> {
				let s = s.trim();
				let by_code = s.parse::<i64>().ok().and_then(Self::from_code);

				by_code
					.or_else(|| Self::from_name(s))
					.ok_or_else(|| MetadataError::new(ErrorKind::UnknownEnumValue(s.to_owned())))
			}
		}

		impl Display for $name {
			fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.name())
			}
		}
	};
}

itunes_enum! {
	/// The `cpil` flag, marking a track as part of a compilation
	ItunesCompilation {
		No => 0,
		Yes => 1,
	}
}

itunes_enum! {
	/// The `stik` media kind
	ItunesMediaType {
		HomeVideo => 0,
		Normal => 1,
		Audiobook => 2,
		WhackedBookmark => 5,
		MusicVideo => 6,
		Movie => 9,
		TvShow => 10,
		Booklet => 11,
		Ringtone => 14,
		Podcast => 21,
		ItunesU => 23,
	}
}

itunes_enum! {
	/// The `pgap` gapless playback flag
	ItunesPlayGap {
		InsertGap => 0,
		NoGap => 1,
	}
}

#[cfg(test)]
mod tests {
	use crate::error::ErrorKind;
	use crate::items::{ItunesCompilation, ItunesMediaType, ItunesPlayGap};

	#[test_log::test]
	fn parse_code_or_name() {
		assert_eq!("2".parse::<ItunesMediaType>().unwrap(), ItunesMediaType::Audiobook);
		assert_eq!(
			"audiobook".parse::<ItunesMediaType>().unwrap(),
			ItunesMediaType::Audiobook
		);
		assert_eq!(" NoGap ".parse::<ItunesPlayGap>().unwrap(), ItunesPlayGap::NoGap);
		assert_eq!("1".parse::<ItunesCompilation>().unwrap(), ItunesCompilation::Yes);
	}

	#[test_log::test]
	fn undefined_code_rejected() {
		// 3 is a gap in the `stik` codes
		let err = "3".parse::<ItunesMediaType>().unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnknownEnumValue(v) if v == "3"));

		assert!("Maybe".parse::<ItunesCompilation>().is_err());
	}

	#[test_log::test]
	fn stored_as_code() {
		assert_eq!(ItunesMediaType::Podcast.code(), 21);
		assert_eq!(ItunesMediaType::from_code(23), Some(ItunesMediaType::ItunesU));
		assert_eq!(ItunesMediaType::Podcast.to_string(), "Podcast");
	}
}
