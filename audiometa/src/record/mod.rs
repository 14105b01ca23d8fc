//! The tagged-file abstraction
//!
//! A [`Record`] holds the metadata of a single audio file: a set of typed attributes, an
//! [`ExtensionMap`] for everything else, chapters, pictures, and lyrics. Reading and writing go
//! through [`Property`](crate::property::Property) based accessors, which take care of mapping
//! extension-backed properties to the right keys for the record's active
//! [`Specification`]s.

mod accessor;
mod extension;
mod part;

pub use extension::ExtensionMap;
pub use part::PartState;

use crate::error::MetadataError;
use crate::file::{FileType, TagCodec, TagFormats};
use crate::items::{Chapter, Lyrics, Picture, Timestamp};
use crate::specification::{self, ResolveContext, Specification};

use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::time::Duration;

// Generates the typed attributes of a `Record`
//
// Usage:
//
// native_fields! {
//     text => [field_name, ...];
//     copy => [field_name: Type, ...];
// }
//
// Every field gets a getter, `set_` and `remove_` method on `Record`.
macro_rules! native_fields {
	(
		text => [$($text:ident),+ $(,)?];
		copy => [$($copy:ident: $ty:ty),+ $(,)?];
	) => {
		#[derive(Clone, Debug, Default, PartialEq)]
		pub(crate) struct NativeFields {
			$(pub(crate) $text: Option<String>,)+
			$(pub(crate) $copy: Option<$ty>,)+
		}

		impl Record {
			$(
				paste::paste! {
					#[doc = "Returns the " $text " attribute"]
					pub fn $text(&self) -> Option<&str> {
						self.native.$text.as_deref()
					}

					#[doc = "Sets the " $text " attribute"]
					pub fn [<set_ $text>](&mut self, value: impl Into<String>) {
						self.native.$text = Some(value.into());
					}

					#[doc = "Removes the " $text " attribute"]
					pub fn [<remove_ $text>](&mut self) {
						self.native.$text = None;
					}
				}
			)+

			$(
				paste::paste! {
					#[doc = "Returns the " $copy " attribute"]
					pub fn $copy(&self) -> Option<$ty> {
						self.native.$copy
					}

					#[doc = "Sets the " $copy " attribute"]
					pub fn [<set_ $copy>](&mut self, value: $ty) {
						self.native.$copy = Some(value);
					}

					#[doc = "Removes the " $copy " attribute"]
					pub fn [<remove_ $copy>](&mut self) {
						self.native.$copy = None;
					}
				}
			)+
		}
	};
}

native_fields! {
	text => [
		album,
		album_artist,
		artist,
		chapters_table_description,
		composer,
		comment,
		conductor,
		copyright,
		description,
		encoded_by,
		genre,
		group,
		long_description,
		movement_name,
		original_album,
		original_artist,
		publisher,
		sort_title,
		sort_album,
		sort_artist,
		sort_album_artist,
		title,
	];
	copy => [
		disc_number: i32,
		disc_total: i32,
		track_number: i32,
		track_total: i32,
		popularity: f32,
		publishing_date: Timestamp,
		recording_date: Timestamp,
	];
}

/// The metadata of a single audio file
///
/// # Examples
///
/// ```rust
/// use audiometa::property::{Property, Value};
/// use audiometa::record::Record;
/// use audiometa::specification::Specification;
///
/// # fn main() -> audiometa::error::Result<()> {
/// let mut record = Record::new(Specification::Id3v24);
/// record.set(Property::Narrator, Some(Value::from("Jim Dale")))?;
///
/// assert_eq!(record.extension_map().get("TXXX:NARRATOR"), Some("Jim Dale"));
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct Record {
	path: Option<PathBuf>,
	file_type: Option<FileType>,
	manual_specification: Specification,
	tag_formats: TagFormats,
	specifications: OnceCell<Vec<Specification>>,
	duration: Duration,
	total_duration: Option<Duration>,

	pub(crate) native: NativeFields,
	pub(crate) movement: Option<String>,
	pub(crate) extension: ExtensionMap,
	pub(crate) chapters: Vec<Chapter>,
	pub(crate) pictures: Vec<Picture>,
	pub(crate) lyrics: Option<Lyrics>,
}

impl Record {
	/// Create an empty record tagged with `specification`
	///
	/// The specification is only used while the record has no tag containers present.
	pub fn new(specification: Specification) -> Self {
		Self {
			manual_specification: specification,
			..Self::default()
		}
	}

	/// Create an empty record for the file at `path`
	///
	/// The [`FileType`] is guessed from the extension. Nothing is read, see
	/// [`Record::read_from_path`] for that.
	pub fn with_path(path: impl AsRef<Path>) -> Self {
		let path = path.as_ref();
		Self {
			path: Some(path.to_path_buf()),
			file_type: FileType::from_path(path),
			..Self::default()
		}
	}

	/// Read the record at `path` using `codec`
	///
	/// # Errors
	///
	/// Any error raised by the codec
	///
	/// # Examples
	///
	/// ```rust,ignore
	/// use audiometa::record::Record;
	///
	/// let record = Record::read_from_path("audiobook.m4b", &mut codec)?;
	/// println!("{:?}", record.specifications());
	/// ```
	pub fn read_from_path<C>(path: impl AsRef<Path>, codec: &mut C) -> Result<Self, C::Error>
	where
		C: TagCodec,
	{
		let mut record = Self::with_path(path);
		if let Some(path) = record.path.clone() {
			codec.read(&path, &mut record)?;
		}

		Ok(record)
	}

	/// Write the record back to its path using `codec`
	///
	/// The tag containers the codec reports afterwards replace the present ones, so the
	/// active specifications are resolved again on next use.
	///
	/// # Errors
	///
	/// * The record has no path ([`ErrorKind::NoPath`](crate::error::ErrorKind::NoPath))
	/// * Any error raised by the codec
	pub fn save<C>(&mut self, codec: &mut C) -> Result<(), C::Error>
	where
		C: TagCodec,
	{
		let Some(path) = self.path.clone() else {
			return Err(MetadataError::new(crate::error::ErrorKind::NoPath).into());
		};

		let written = codec.write(&path, self)?;

		let mut formats = self.tag_formats.clone();
		formats.present = written.present;
		if !written.supported.is_empty() {
			formats.supported = written.supported;
		}

		self.set_tag_formats(formats);
		Ok(())
	}

	/// The path the record was read from
	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// The audio container
	pub fn file_type(&self) -> Option<FileType> {
		self.file_type
	}

	/// Change the audio container
	///
	/// This invalidates the resolved specifications.
	pub fn set_file_type(&mut self, file_type: Option<FileType>) {
		self.file_type = file_type;
		self.invalidate_specifications();
	}

	/// The tag containers reported by the codec
	pub fn tag_formats(&self) -> &TagFormats {
		&self.tag_formats
	}

	/// Replace the tag containers reported by the codec
	///
	/// This invalidates the resolved specifications.
	pub fn set_tag_formats(&mut self, formats: TagFormats) {
		self.tag_formats = formats;
		self.invalidate_specifications();
	}

	/// The active specifications, in priority order
	///
	/// This is resolved once and cached until the tag containers change. In order:
	///
	/// 1. The containers physically present in the file
	/// 2. The specification the record was created with
	/// 3. A single pick out of the containers the codec can write: the audio container's
	///    native format, `.ape` files with APE support, ID3v2 (see
	///    [`GlobalOptions::id3v2_version`](crate::config::GlobalOptions::id3v2_version)),
	///    ID3v1, then APE
	///
	/// An empty list means no specification applies.
	pub fn specifications(&self) -> &[Specification] {
		self.specifications.get_or_init(|| {
			let specifications = specification::resolve(&ResolveContext {
				formats: &self.tag_formats,
				manual: self.manual_specification,
				file_type: self.file_type,
				path: self.path.as_deref(),
			});

			log::debug!("Resolved specifications: {specifications:?}");
			specifications
		})
	}

	fn invalidate_specifications(&mut self) {
		if self.specifications.take().is_some() {
			log::debug!("Tag containers changed, specifications will be resolved again");
		}
	}

	/// The extension fields
	pub fn extension_map(&self) -> &ExtensionMap {
		&self.extension
	}

	/// The extension fields, mutably
	///
	/// Writing directly bypasses specification mapping, this is meant for codecs.
	pub fn extension_map_mut(&mut self) -> &mut ExtensionMap {
		&mut self.extension
	}

	/// The chapters
	pub fn chapters(&self) -> &[Chapter] {
		&self.chapters
	}

	/// The chapters, mutably
	pub fn chapters_mut(&mut self) -> &mut Vec<Chapter> {
		&mut self.chapters
	}

	/// The embedded pictures
	pub fn pictures(&self) -> &[Picture] {
		&self.pictures
	}

	/// The embedded pictures, mutably
	pub fn pictures_mut(&mut self) -> &mut Vec<Picture> {
		&mut self.pictures
	}

	/// The lyrics
	pub fn lyrics(&self) -> Option<&Lyrics> {
		self.lyrics.as_ref()
	}

	/// Sets the lyrics
	pub fn set_lyrics(&mut self, lyrics: Lyrics) {
		self.lyrics = Some(lyrics);
	}

	/// Removes the lyrics
	pub fn remove_lyrics(&mut self) {
		self.lyrics = None;
	}

	/// The duration reported by the codec
	pub fn duration(&self) -> Duration {
		self.duration
	}

	/// Sets the duration reported by the codec
	pub fn set_duration(&mut self, duration: Duration) {
		self.duration = duration;
	}

	/// The total duration
	///
	/// This is the codec's duration, unless overridden with [`Record::set_total_duration`].
	pub fn total_duration(&self) -> Duration {
		self.total_duration.unwrap_or(self.duration)
	}

	/// Override the total duration
	///
	/// Useful for records with no audio behind them, or when the codec could not determine it.
	pub fn set_total_duration(&mut self, duration: Duration) {
		self.total_duration = Some(duration);
	}
}
