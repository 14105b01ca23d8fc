use crate::config::global_options;
use crate::error::{ErrorKind, MetadataError, Result};
use crate::items::{
	ItunesCompilation, ItunesMediaType, ItunesPlayGap, Lyrics, Timestamp,
};
use crate::property::{EnumKind, Property, Value, ValueKind};
use crate::record::{ExtensionMap, Record};
use crate::specification::Specification;

impl Record {
	/// Read a property
	///
	/// Absent properties read back as their removal value (see [`Value::removal`]). Enum and
	/// lyrics properties have none, and return `None` instead.
	///
	/// Extension-backed properties are looked up through every active specification in order,
	/// the first one with a parseable value wins.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Timestamp;
	/// use audiometa::property::{Property, Value};
	/// use audiometa::record::Record;
	///
	/// let record = Record::default();
	///
	/// assert_eq!(record.get(Property::Title), Some(Value::from("")));
	/// assert_eq!(record.get(Property::RecordingDate), Some(Value::DateTime(Timestamp::MIN)));
	/// assert_eq!(record.get(Property::ItunesMediaType), None);
	/// ```
	pub fn get(&self, property: Property) -> Option<Value> {
		self.get_present(property)
			.or_else(|| Value::removal(property.value_kind()))
	}

	// Only values actually stored, no removal values
	fn get_present(&self, property: Property) -> Option<Value> {
		let native = &self.native;
		match property {
			Property::Album => native.album.clone().map(Value::String),
			Property::AlbumArtist => native.album_artist.clone().map(Value::String),
			Property::Artist => native.artist.clone().map(Value::String),
			Property::ChaptersTableDescription => {
				native.chapters_table_description.clone().map(Value::String)
			},
			Property::Composer => native.composer.clone().map(Value::String),
			Property::Comment => native.comment.clone().map(Value::String),
			Property::Conductor => native.conductor.clone().map(Value::String),
			Property::Copyright => native.copyright.clone().map(Value::String),
			Property::Description => native.description.clone().map(Value::String),
			Property::DiscNumber => native.disc_number.map(Value::Int),
			Property::DiscTotal => native.disc_total.map(Value::Int),
			Property::EncodedBy => native.encoded_by.clone().map(Value::String),
			Property::Genre => native.genre.clone().map(Value::String),
			Property::Group => native.group.clone().map(Value::String),
			Property::LongDescription => native.long_description.clone().map(Value::String),
			Property::Lyrics => self.lyrics.clone().map(Value::Lyrics),
			Property::Part => self.part().map(|p| Value::String(p.to_owned())),
			Property::Movement => self.movement.clone().map(Value::String),
			Property::MovementName => native.movement_name.clone().map(Value::String),
			Property::OriginalAlbum => native.original_album.clone().map(Value::String),
			Property::OriginalArtist => native.original_artist.clone().map(Value::String),
			Property::Popularity => native.popularity.map(Value::Float),
			Property::Publisher => native.publisher.clone().map(Value::String),
			Property::PublishingDate => native.publishing_date.map(Value::DateTime),
			Property::RecordingDate => native.recording_date.map(Value::DateTime),
			Property::SortTitle => native.sort_title.clone().map(Value::String),
			Property::SortAlbum => native.sort_album.clone().map(Value::String),
			Property::SortArtist => native.sort_artist.clone().map(Value::String),
			Property::SortAlbumArtist => native.sort_album_artist.clone().map(Value::String),
			Property::Title => native.title.clone().map(Value::String),
			Property::TrackNumber => native.track_number.map(Value::Int),
			Property::TrackTotal => native.track_total.map(Value::Int),
			Property::Chapters => Some(Value::Chapters(self.chapters.clone())),
			Property::EmbeddedPictures => Some(Value::Pictures(self.pictures.clone())),
			Property::AdditionalFields => Some(Value::Map(self.extension.clone())),
			Property::Bpm
			| Property::EncoderSettings
			| Property::EncodingTool
			| Property::ItunesCompilation
			| Property::ItunesMediaType
			| Property::ItunesPlayGap
			| Property::Narrator
			| Property::PurchaseDate
			| Property::SortComposer
			| Property::Subtitle => self.read_extension(property),
		}
	}

	/// Write a property
	///
	/// `None`, or a value equal to the property's removal value, removes the property.
	/// Extension-backed properties are written to the key of every active specification
	/// that maps them.
	///
	/// # Errors
	///
	/// `value` is not of the property's [`ValueKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::file::{TagFormat, TagFormats};
	/// use audiometa::property::{Property, Value};
	/// use audiometa::record::Record;
	///
	/// # fn main() -> audiometa::error::Result<()> {
	/// let mut record = Record::default();
	/// record.set_tag_formats(
	/// 	TagFormats::new()
	/// 		.present(TagFormat::id3v24())
	/// 		.present(TagFormat::ape()),
	/// );
	///
	/// record.set(Property::Subtitle, Some(Value::from("Live at Wembley")))?;
	///
	/// assert_eq!(record.extension_map().get("TIT3"), Some("Live at Wembley"));
	/// assert_eq!(record.extension_map().get("Subtitle"), Some("Live at Wembley"));
	///
	/// assert!(record.set(Property::Subtitle, Some(Value::Int(5))).is_err());
	/// # Ok(()) }
	/// ```
	pub fn set(&mut self, property: Property, value: Option<Value>) -> Result<()> {
		let Some(value) = value else {
			self.remove(property);
			return Ok(());
		};

		let expected = property.value_kind();
		if value.kind() != expected {
			return Err(MetadataError::new(ErrorKind::ValueKindMismatch {
				property,
				expected,
			}));
		}

		if Value::removal(expected).as_ref() == Some(&value) {
			self.remove(property);
			return Ok(());
		}

		let native = &mut self.native;
		match property {
			Property::Album => native.album = text(value),
			Property::AlbumArtist => native.album_artist = text(value),
			Property::Artist => native.artist = text(value),
			Property::ChaptersTableDescription => native.chapters_table_description = text(value),
			Property::Composer => native.composer = text(value),
			Property::Comment => native.comment = text(value),
			Property::Conductor => native.conductor = text(value),
			Property::Copyright => native.copyright = text(value),
			Property::Description => native.description = text(value),
			Property::DiscNumber => native.disc_number = int(&value),
			Property::DiscTotal => native.disc_total = int(&value),
			Property::EncodedBy => native.encoded_by = text(value),
			Property::Genre => native.genre = text(value),
			Property::Group => native.group = text(value),
			Property::LongDescription => native.long_description = text(value),
			Property::Lyrics => {
				self.lyrics = match value {
					Value::Lyrics(lyrics) if !lyrics.is_empty() => Some(lyrics),
					_ => None,
				}
			},
			Property::Part => {
				if let Some(part) = text(value) {
					self.set_part(&part);
				}
			},
			Property::Movement => {
				if let Some(movement) = text(value) {
					self.set_movement(&movement);
				}
			},
			Property::MovementName => native.movement_name = text(value),
			Property::OriginalAlbum => native.original_album = text(value),
			Property::OriginalArtist => native.original_artist = text(value),
			Property::Popularity => {
				native.popularity = match value {
					Value::Float(f) => Some(f),
					_ => None,
				}
			},
			Property::Publisher => native.publisher = text(value),
			Property::PublishingDate => native.publishing_date = value.as_timestamp(),
			Property::RecordingDate => native.recording_date = value.as_timestamp(),
			Property::SortTitle => native.sort_title = text(value),
			Property::SortAlbum => native.sort_album = text(value),
			Property::SortArtist => native.sort_artist = text(value),
			Property::SortAlbumArtist => native.sort_album_artist = text(value),
			Property::Title => native.title = text(value),
			Property::TrackNumber => native.track_number = int(&value),
			Property::TrackTotal => native.track_total = int(&value),
			Property::Chapters => {
				if let Value::Chapters(chapters) = value {
					self.chapters = chapters;
				}
			},
			Property::EmbeddedPictures => {
				if let Value::Pictures(pictures) = value {
					self.pictures = pictures;
				}
			},
			Property::AdditionalFields => {
				if let Value::Map(map) = value {
					self.replace_extension_map(map);
				}
			},
			Property::Bpm
			| Property::EncoderSettings
			| Property::EncodingTool
			| Property::ItunesCompilation
			| Property::ItunesMediaType
			| Property::ItunesPlayGap
			| Property::Narrator
			| Property::PurchaseDate
			| Property::SortComposer
			| Property::Subtitle => self.write_extension(property, Some(&value)),
		}

		Ok(())
	}

	/// Remove a property
	///
	/// Removing either [`Property::Part`] or [`Property::Movement`] clears both.
	pub fn remove(&mut self, property: Property) {
		let native = &mut self.native;
		match property {
			Property::Album => native.album = None,
			Property::AlbumArtist => native.album_artist = None,
			Property::Artist => native.artist = None,
			Property::ChaptersTableDescription => native.chapters_table_description = None,
			Property::Composer => native.composer = None,
			Property::Comment => native.comment = None,
			Property::Conductor => native.conductor = None,
			Property::Copyright => native.copyright = None,
			Property::Description => native.description = None,
			Property::DiscNumber => native.disc_number = None,
			Property::DiscTotal => native.disc_total = None,
			Property::EncodedBy => native.encoded_by = None,
			Property::Genre => native.genre = None,
			Property::Group => native.group = None,
			Property::LongDescription => native.long_description = None,
			Property::Lyrics => self.lyrics = None,
			Property::Part | Property::Movement => self.clear_part_and_movement(),
			Property::MovementName => native.movement_name = None,
			Property::OriginalAlbum => native.original_album = None,
			Property::OriginalArtist => native.original_artist = None,
			Property::Popularity => native.popularity = None,
			Property::Publisher => native.publisher = None,
			Property::PublishingDate => native.publishing_date = None,
			Property::RecordingDate => native.recording_date = None,
			Property::SortTitle => native.sort_title = None,
			Property::SortAlbum => native.sort_album = None,
			Property::SortArtist => native.sort_artist = None,
			Property::SortAlbumArtist => native.sort_album_artist = None,
			Property::Title => native.title = None,
			Property::TrackNumber => native.track_number = None,
			Property::TrackTotal => native.track_total = None,
			Property::Chapters => self.chapters.clear(),
			Property::EmbeddedPictures => self.pictures.clear(),
			Property::AdditionalFields => self.replace_extension_map(ExtensionMap::new()),
			Property::Bpm
			| Property::EncoderSettings
			| Property::EncodingTool
			| Property::ItunesCompilation
			| Property::ItunesMediaType
			| Property::ItunesPlayGap
			| Property::Narrator
			| Property::PurchaseDate
			| Property::SortComposer
			| Property::Subtitle => self.write_extension(property, None),
		}
	}

	/// Write a property from its textual form
	///
	/// | Kind         | Accepted input                                                   |
	/// |--------------|------------------------------------------------------------------|
	/// | `String`     | Anything, stored verbatim                                        |
	/// | `Int`        | A whole number                                                   |
	/// | `Float`      | A number                                                         |
	/// | `DateTime`   | A [`Timestamp`], or a bare 4 digit year (read as January 1st)    |
	/// | `Enum`       | The variant name (case insensitive) or its numeric code          |
	/// | `Lyrics`     | Any non-blank text, stored as unsynchronized lyrics              |
	///
	/// Input that fails to parse removes the property. List and map properties cannot be
	/// written from a string, and are left untouched.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Timestamp;
	/// use audiometa::property::{Property, Value};
	/// use audiometa::record::Record;
	///
	/// let mut record = Record::default();
	///
	/// record.set_from_string(Property::RecordingDate, "1997");
	/// assert_eq!(
	/// 	record.get(Property::RecordingDate),
	/// 	Some(Value::DateTime(Timestamp::from_year(1997)))
	/// );
	///
	/// record.set_from_string(Property::TrackNumber, "four");
	/// assert_eq!(record.get(Property::TrackNumber), Some(Value::Int(0)));
	/// ```
	pub fn set_from_string(&mut self, property: Property, raw: &str) {
		let kind = property.value_kind();
		if matches!(
			kind,
			ValueKind::ChapterList | ValueKind::PictureList | ValueKind::StringMap
		) {
			log::debug!("{property} cannot be set from a string, ignoring");
			return;
		}

		let value = parse_value(kind, raw);
		if value.is_none() && !raw.is_empty() {
			log::debug!("Unable to read \"{raw}\" as {kind:?} for {property}, removing");
		}

		// The value kind always matches here
		let _ = self.set(property, value);
	}

	/// Write a property only if it differs from the current value
	///
	/// Extension-backed values are compared in the form they would be stored in, so a
	/// midnight date that is written without its time still counts as unchanged.
	///
	/// Returns whether anything changed.
	///
	/// # Errors
	///
	/// See [`Record::set`]
	pub fn update(&mut self, property: Property, value: Option<Value>) -> Result<bool> {
		let current = self.get(property);
		let incoming = match value {
			Some(value) => Some(value),
			None => Value::removal(property.value_kind()),
		};

		let stored = incoming.clone().and_then(|value| self.stored_form(property, value));
		if current == stored || current == incoming {
			return Ok(false);
		}

		self.set(property, incoming)?;
		Ok(true)
	}

	/// The extension fields that back a mapped property in one of the active specifications
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::record::Record;
	/// use audiometa::specification::Specification;
	///
	/// let mut record = Record::new(Specification::Mp4);
	/// record.extension_map_mut().insert("©nrt", "Jim Dale");
	/// record.extension_map_mut().insert("----:com.apple.iTunes:MOOD", "Calm");
	///
	/// let mapped = record.mapped_additional_fields();
	/// assert_eq!(mapped.len(), 1);
	/// assert_eq!(mapped.get("©nrt"), Some("Jim Dale"));
	/// ```
	pub fn mapped_additional_fields(&self) -> ExtensionMap {
		self.extension
			.iter()
			.filter(|(key, _)| self.is_mapped_key(key))
			.collect()
	}

	// What `get` would return after writing `value`
	fn stored_form(&self, property: Property, value: Value) -> Option<Value> {
		let kind = property.value_kind();
		if !property.is_extension_backed() || property == Property::Part || value.kind() != kind {
			return Some(value);
		}

		match self.extension_keys(property).first() {
			Some((spec, _)) => {
				parse_value(kind, &serialize_value(&value, *spec)).or_else(|| Value::removal(kind))
			},
			None => Value::removal(kind),
		}
	}

	pub(crate) fn is_mapped_key(&self, key: &str) -> bool {
		self.specifications()
			.iter()
			.any(|spec| spec.is_mapped_key(key))
	}

	// The keys a property is written to, empty with no active specification
	fn extension_keys(&self, property: Property) -> Vec<(Specification, &'static str)> {
		let mut keys: Vec<(Specification, &'static str)> = Vec::new();
		for spec in self.specifications() {
			let Some(key) = property.map_key(*spec) else {
				continue;
			};

			if keys.iter().all(|(_, k)| *k != key) {
				keys.push((*spec, key));
			}
		}

		keys
	}

	pub(crate) fn read_extension_raw(&self, property: Property) -> Option<&str> {
		self.extension_keys(property)
			.into_iter()
			.find_map(|(_, key)| self.extension.get(key))
	}

	fn read_extension(&self, property: Property) -> Option<Value> {
		let raw = self.read_extension_raw(property)?;
		let value = parse_value(property.value_kind(), raw);
		if value.is_none() {
			log::warn!("Unable to read stored value \"{raw}\" for {property}");
		}

		value
	}

	pub(crate) fn write_extension(&mut self, property: Property, value: Option<&Value>) {
		let keys = self.extension_keys(property);
		if keys.is_empty() && value.is_some() {
			log::debug!("No active specification maps {property}, dropping the write");
		}

		for (spec, key) in keys {
			match value {
				Some(value) => {
					let serialized = serialize_value(value, spec);
					log::trace!("Writing {property} to \"{key}\" = \"{serialized}\"");
					self.extension.insert(key, serialized);
				},
				None => {
					if self.extension.remove(key).is_some() {
						log::trace!("Removed {property} from \"{key}\"");
					}
				},
			}
		}
	}

	// Mapped keys are only ever written through their property
	fn replace_extension_map(&mut self, map: ExtensionMap) {
		let mut map: ExtensionMap = map
			.iter()
			.filter(|(key, _)| {
				let mapped = self.is_mapped_key(key);
				if mapped {
					log::trace!("Skipping incoming mapped field \"{key}\"");
				}
				!mapped
			})
			.collect();

		for (key, value) in self.mapped_additional_fields() {
			map.insert(key, value);
		}

		self.extension = map;
	}
}

fn text(value: Value) -> Option<String> {
	match value {
		Value::String(s) if !s.is_empty() => Some(s),
		_ => None,
	}
}

fn int(value: &Value) -> Option<i32> {
	value.as_int().filter(|i| *i != 0)
}

fn parse_value(kind: ValueKind, raw: &str) -> Option<Value> {
	match kind {
		ValueKind::String => Some(Value::String(raw.to_owned())),
		ValueKind::Int => raw.trim().parse::<i32>().ok().map(Value::Int),
		ValueKind::Float => raw.trim().parse::<f32>().ok().map(Value::Float),
		ValueKind::DateTime => parse_date(raw).map(Value::DateTime),
		ValueKind::Enum(EnumKind::Compilation) => {
			raw.parse::<ItunesCompilation>().ok().map(Value::Compilation)
		},
		ValueKind::Enum(EnumKind::MediaType) => {
			raw.parse::<ItunesMediaType>().ok().map(Value::MediaType)
		},
		ValueKind::Enum(EnumKind::PlayGap) => raw.parse::<ItunesPlayGap>().ok().map(Value::PlayGap),
		ValueKind::Lyrics => {
			(!raw.trim().is_empty()).then(|| Value::Lyrics(Lyrics::unsynchronized(raw)))
		},
		ValueKind::ChapterList | ValueKind::PictureList | ValueKind::StringMap => None,
	}
}

fn parse_date(raw: &str) -> Option<Timestamp> {
	let trimmed = raw.trim();
	if trimmed.len() == 4 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
		return trimmed.parse::<u16>().ok().map(Timestamp::from_year);
	}

	let parsing_mode = unsafe { global_options().parsing_mode };
	match Timestamp::parse(&mut trimmed.as_bytes(), parsing_mode) {
		Ok(timestamp) => timestamp,
		Err(e) => {
			log::debug!("Invalid date \"{trimmed}\": {e}");
			None
		},
	}
}

fn serialize_value(value: &Value, spec: Specification) -> String {
	match value {
		Value::String(s) => s.clone(),
		Value::Int(i) => i.to_string(),
		Value::Float(f) => f.to_string(),
		Value::DateTime(timestamp) => match spec {
			Specification::Vorbis => timestamp.to_string(),
			_ => timestamp.to_spaced_string(),
		},
		Value::Compilation(c) => c.code().to_string(),
		Value::MediaType(m) => m.code().to_string(),
		Value::PlayGap(p) => p.code().to_string(),
		Value::Lyrics(lyrics) => lyrics.unsynchronized.clone(),
		Value::Chapters(_) | Value::Pictures(_) | Value::Map(_) => String::new(),
	}
}
