/// The family a [`TagFormat`] belongs to
///
/// The discriminant is the numeric identifier codecs report for the format.
/// An identifier of `0` means "no format", and is never reported as present.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
#[non_exhaustive]
pub enum TagType {
	/// A container's own tagging scheme (MP4 ilst, Vorbis comments, ASF, ...)
	Native = 1,
	/// ID3v1 and ID3v1.1
	Id3v1 = 2,
	/// All ID3v2 versions
	Id3v2 = 3,
	/// APEv1 and APEv2
	Ape = 4,
}

impl TagType {
	/// Get a `TagType` from its numeric identifier
	pub fn from_id(id: u32) -> Option<Self> {
		match id {
			1 => Some(Self::Native),
			2 => Some(Self::Id3v1),
			3 => Some(Self::Id3v2),
			4 => Some(Self::Ape),
			_ => None,
		}
	}
}

/// A tag container format, as reported by a codec
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagFormat {
	id: u32,
	name: String,
	short_name: String,
}

impl TagFormat {
	/// Create a new `TagFormat`
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::file::{TagFormat, TagType};
	///
	/// let format = TagFormat::new(TagType::Id3v2 as u32, "ID3v2.3", "ID3v2");
	/// assert_eq!(format.tag_type(), Some(TagType::Id3v2));
	/// ```
	pub fn new(id: u32, name: impl Into<String>, short_name: impl Into<String>) -> Self {
		Self {
			id,
			name: name.into(),
			short_name: short_name.into(),
		}
	}

	/// A container-native format, ex. `"Native tagging / MPEG-4"`
	pub fn native(name: impl Into<String>) -> Self {
		Self::new(TagType::Native as u32, name, "Native")
	}

	/// `ID3v1.1`
	pub fn id3v1() -> Self {
		Self::new(TagType::Id3v1 as u32, "ID3v1.1", "ID3v1")
	}

	/// `ID3v2.3`
	pub fn id3v23() -> Self {
		Self::new(TagType::Id3v2 as u32, "ID3v2.3", "ID3v2")
	}

	/// `ID3v2.4`
	pub fn id3v24() -> Self {
		Self::new(TagType::Id3v2 as u32, "ID3v2.4", "ID3v2")
	}

	/// `APEtag v2`
	pub fn ape() -> Self {
		Self::new(TagType::Ape as u32, "APEtag v2", "APE")
	}

	/// The numeric identifier
	pub fn id(&self) -> u32 {
		self.id
	}

	/// The human-readable name, ex. `"ID3v2.4"`
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The short name, ex. `"Native"`
	pub fn short_name(&self) -> &str {
		&self.short_name
	}

	/// The [`TagType`] for this format's identifier
	pub fn tag_type(&self) -> Option<TagType> {
		TagType::from_id(self.id)
	}
}

/// The tag containers a codec found in, and can write to, a file
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct TagFormats {
	/// Containers physically present, in the order the codec found them
	pub present: Vec<TagFormat>,
	/// Containers the codec is able to write for this file
	pub supported: Vec<TagFormat>,
}

impl TagFormats {
	/// Create an empty `TagFormats`
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a present container
	pub fn present(mut self, format: TagFormat) -> Self {
		self.present.push(format);
		self
	}

	/// Add a supported container
	pub fn supported(mut self, format: TagFormat) -> Self {
		self.supported.push(format);
		self
	}

	pub(crate) fn supports(&self, tag_type: TagType) -> bool {
		self.supported.iter().any(|f| f.tag_type() == Some(tag_type))
	}
}
