//! Tag dialects and their detection
//!
//! A [`Specification`] decides which extension field key realizes a
//! [`Property`](crate::property::Property). A file can carry several tag containers at once
//! (ex. ID3v1 + ID3v2.4 + APE in an MP3), so a record resolves to an ordered list of them.

mod map;
mod resolve;

pub(crate) use resolve::{ResolveContext, resolve};

/// A tag-format dialect
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Specification {
	/// No dialect
	#[default]
	Undefined,
	/// ID3v1 and ID3v1.1
	Id3v1,
	/// ID3v2.3
	Id3v23,
	/// ID3v2.4
	Id3v24,
	/// MP4 ilst atoms
	Mp4,
	/// Matroska tags
	Matroska,
	/// ASF/WMA content descriptors
	WindowsMediaAsf,
	/// APEv2
	Ape,
	/// Vorbis comments
	Vorbis,
	/// AIFF text chunks
	Aiff,
}

impl Specification {
	/// Every specification
	pub const ALL: &'static [Specification] = &[
		Specification::Undefined,
		Specification::Id3v1,
		Specification::Id3v23,
		Specification::Id3v24,
		Specification::Mp4,
		Specification::Matroska,
		Specification::WindowsMediaAsf,
		Specification::Ape,
		Specification::Vorbis,
		Specification::Aiff,
	];

	/// Map a codec-reported container name to a specification
	///
	/// Unknown names map to [`Specification::Undefined`].
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::specification::Specification;
	///
	/// assert_eq!(Specification::from_container_name("ID3v2.3"), Specification::Id3v23);
	/// assert_eq!(Specification::from_container_name("Lyrics3"), Specification::Undefined);
	/// ```
	pub fn from_container_name(name: &str) -> Self {
		match name {
			"Native tagging / MPEG-4" => Specification::Mp4,
			"Native tagging / AIFF" => Specification::Aiff,
			"Native tagging / Vorbis (OGG)" => Specification::Vorbis,
			"ID3v1.1" => Specification::Id3v1,
			"ID3v2.3" => Specification::Id3v23,
			"ID3v2.4" => Specification::Id3v24,
			"APEtag v2" => Specification::Ape,
			_ => Specification::Undefined,
		}
	}

	/// Whether `key` is the extension field key of some property in this specification
	pub fn is_mapped_key(self, key: &str) -> bool {
		crate::property::Property::from_key(self, key).is_some()
	}
}
