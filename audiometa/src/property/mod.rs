//! The property vocabulary
//!
//! Every piece of metadata a [`Record`](crate::record::Record) exposes is named by a [`Property`].
//! Each property holds exactly one [`ValueKind`], regardless of the tag format it ends up in.

mod value;

pub use value::Value;

use crate::error::{ErrorKind, MetadataError, Result};

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The iTunes enumeration a [`ValueKind::Enum`] refers to
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumKind {
	/// [`ItunesCompilation`](crate::items::ItunesCompilation)
	Compilation,
	/// [`ItunesMediaType`](crate::items::ItunesMediaType)
	MediaType,
	/// [`ItunesPlayGap`](crate::items::ItunesPlayGap)
	PlayGap,
}

/// The kind of value a [`Property`] holds
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// Free-form text
	String,
	/// A whole number
	Int,
	/// A floating point number
	Float,
	/// A [`Timestamp`](crate::items::Timestamp)
	DateTime,
	/// One of the iTunes enumerations
	Enum(EnumKind),
	/// [`Lyrics`](crate::items::Lyrics)
	Lyrics,
	/// A list of [`Chapter`](crate::items::Chapter)s
	ChapterList,
	/// A list of [`Picture`](crate::items::Picture)s
	PictureList,
	/// An [`ExtensionMap`](crate::record::ExtensionMap)
	StringMap,
}

// Usage:
//
// gen_properties! {
//     Variant => Kind,
//     Variant => Enum(EnumKind),
// }
//
// The declaration order is kept in `Property::ALL`.
macro_rules! gen_properties {
	(
		$(
			$(#[$meta:meta])*
			$variant:ident => $kind:ident $(($sub:ident))?
		),+ $(,)?
	) => {
		/// A semantic metadata property
		///
		/// Variants are declared (and iterated through [`Property::ALL`]) in a fixed order.
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
		#[allow(missing_docs)]
		pub enum Property {
			$(
				$(#[$meta])*
				$variant,
			)+
		}

		impl Property {
			/// Every property, in declaration order
			pub const ALL: &'static [Property] = &[$(Property::$variant),+];

			/// The [`ValueKind`] held by this property
			pub const fn value_kind(self) -> ValueKind {
				match self {
					$(Property::$variant => ValueKind::$kind $((EnumKind::$sub))?),+
				}
			}

			/// The canonical name of the property
			pub const fn name(self) -> &'static str {
				match self {
					$(Property::$variant => stringify!($variant)),+
				}
			}
		}
	};
}

gen_properties! {
	Album => String,
	AlbumArtist => String,
	Artist => String,
	Bpm => Int,
	ChaptersTableDescription => String,
	Composer => String,
	Comment => String,
	Conductor => String,
	Copyright => String,
	Description => String,
	DiscNumber => Int,
	DiscTotal => Int,
	EncodedBy => String,
	EncoderSettings => String,
	EncodingTool => String,
	Genre => String,
	Group => String,
	ItunesCompilation => Enum(Compilation),
	ItunesMediaType => Enum(MediaType),
	ItunesPlayGap => Enum(PlayGap),
	LongDescription => String,
	Lyrics => Lyrics,
	/// Free-form part designation, ex. `"2.1"`
	///
	/// An integer part is mirrored into [`Property::Movement`].
	Part => String,
	/// The integer movement number
	Movement => String,
	MovementName => String,
	Narrator => String,
	OriginalAlbum => String,
	OriginalArtist => String,
	Popularity => Float,
	Publisher => String,
	PublishingDate => DateTime,
	PurchaseDate => DateTime,
	RecordingDate => DateTime,
	SortTitle => String,
	SortAlbum => String,
	SortArtist => String,
	SortAlbumArtist => String,
	SortComposer => String,
	Subtitle => String,
	Title => String,
	TrackNumber => Int,
	TrackTotal => Int,
	Chapters => ChapterList,
	EmbeddedPictures => PictureList,
	/// Every extension field, including the ones backing mapped properties
	AdditionalFields => StringMap,
}

impl Property {
	/// Iterate over every property in declaration order
	pub fn iter() -> impl Iterator<Item = Property> {
		Self::ALL.iter().copied()
	}

	/// Whether the property has no dedicated record attribute, and lives in the extension map
	pub const fn is_extension_backed(self) -> bool {
		matches!(
			self,
			Property::Bpm
				| Property::EncoderSettings
				| Property::EncodingTool
				| Property::ItunesCompilation
				| Property::ItunesMediaType
				| Property::ItunesPlayGap
				| Property::Part
				| Property::Narrator
				| Property::PurchaseDate
				| Property::SortComposer
				| Property::Subtitle
		)
	}
}

impl FromStr for Property {
	type Err = MetadataError;

	/// Get a property from its canonical name, ignoring case
	fn from_str(s: &str) -> Result<Self> {
		Self::iter()
			.find(|p| p.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| MetadataError::new(ErrorKind::UnknownProperty(s.to_owned())))
	}
}

impl Display for Property {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use crate::error::ErrorKind;
	use crate::property::{EnumKind, Property, ValueKind};

	#[test_log::test]
	fn declaration_order() {
		assert_eq!(Property::ALL.len(), 45);
		assert_eq!(Property::ALL.first(), Some(&Property::Album));
		assert_eq!(Property::ALL.last(), Some(&Property::AdditionalFields));

		let part = Property::iter().position(|p| p == Property::Part).unwrap();
		let movement = Property::iter().position(|p| p == Property::Movement).unwrap();
		assert_eq!(part + 1, movement);
	}

	#[test_log::test]
	fn value_kinds() {
		assert_eq!(Property::Popularity.value_kind(), ValueKind::Float);
		assert_eq!(Property::Bpm.value_kind(), ValueKind::Int);
		assert_eq!(Property::PurchaseDate.value_kind(), ValueKind::DateTime);
		assert_eq!(
			Property::ItunesMediaType.value_kind(),
			ValueKind::Enum(EnumKind::MediaType)
		);
		assert_eq!(Property::AdditionalFields.value_kind(), ValueKind::StringMap);

		let floats = Property::iter()
			.filter(|p| p.value_kind() == ValueKind::Float)
			.count();
		assert_eq!(floats, 1);
	}

	#[test_log::test]
	fn names() {
		assert_eq!("narrator".parse::<Property>().unwrap(), Property::Narrator);
		assert_eq!(Property::SortAlbumArtist.to_string(), "SortAlbumArtist");

		let err = "Mood".parse::<Property>().unwrap_err();
		assert!(matches!(err.kind(), ErrorKind::UnknownProperty(name) if name == "Mood"));
	}
}
