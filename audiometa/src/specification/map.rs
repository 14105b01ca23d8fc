use crate::property::Property;
use crate::specification::Specification;

use std::collections::HashMap;

// This is used to create the key/Property maps
//
// First comes the name of the map.
// Ex:
//
// APE_MAP;
//
// This is followed by the key value pairs separated by `=>`, with the key being the
// format-specific extension field key and the value being the Property it backs.
// Ex. "Subtitle" => Subtitle
//
// Only extension-backed properties belong here. Properties with a dedicated
// record attribute never touch the extension map.
macro_rules! gen_map {
	(
		$NAME:ident;

		$(
			$key:literal => $variant:ident
		),+ $(,)?
	) => {
		paste::paste! {
			#[allow(non_camel_case_types)]
			struct $NAME;

			impl $NAME {
				fn get_property(&self, key: &str) -> Option<Property> {
					static [<$NAME _INSTANCE>]: std::sync::OnceLock<HashMap<&'static str, Property>> =
						std::sync::OnceLock::new();
					[<$NAME _INSTANCE>]
						.get_or_init(|| {
							let mut map = HashMap::new();
							$(
								map.insert($key, Property::$variant);
							)+
							map
						})
						.get(key)
						.copied()
				}

				fn get_key(&self, property: Property) -> Option<&'static str> {
					match property {
						$(
							Property::$variant => Some($key),
						)+
						_ => None,
					}
				}
			}
		}
	};
}

gen_map!(
	ID3V2_MAP;

	"TBPM"          => Bpm,
	"TSSE"          => EncoderSettings,
	"TCMP"          => ItunesCompilation,
	"TXXX:PART"     => Part,
	"TXXX:NARRATOR" => Narrator,
	"TSOC"          => SortComposer,
	"TIT3"          => Subtitle
);

gen_map!(
	ILST_MAP;

	"tmpo"                           => Bpm,
	"©enc"                           => EncoderSettings,
	"©too"                           => EncodingTool,
	"cpil"                           => ItunesCompilation,
	"stik"                           => ItunesMediaType,
	"pgap"                           => ItunesPlayGap,
	"----:com.pilabor.tone:PART"     => Part,
	"©nrt"                           => Narrator,
	"purd"                           => PurchaseDate,
	"soco"                           => SortComposer,
	"----:com.apple.iTunes:SUBTITLE" => Subtitle
);

gen_map!(
	MATROSKA_MAP;

	"T=30 BPM"               => Bpm,
	"T=30 ENCODER_SETTINGS"  => EncoderSettings,
	"T=20 PART_NUMBER"       => Part,
	"T=30 NARRATED_BY"       => Narrator,
	"T=30 SUBTITLE"          => Subtitle
);

gen_map!(
	ASF_MAP;

	"WM/BeatsPerMinute"   => Bpm,
	"WM/EncodingSettings" => EncoderSettings,
	"WM/ToolName"         => EncodingTool,
	"WM/SubTitle"         => Subtitle
);

gen_map!(
	APE_MAP;

	"BPM"         => Bpm,
	"Compilation" => ItunesCompilation,
	"Subtitle"    => Subtitle
);

gen_map!(
	VORBIS_MAP;

	"BPM"              => Bpm,
	"ENCODER SETTINGS" => EncoderSettings,
	"ENCODER"          => EncodingTool,
	"COMPILATION"      => ItunesCompilation,
	"PARTNUMBER"       => Part,
	"SUBTITLE"         => Subtitle
);

impl Property {
	/// Maps the property to the extension field key used by `specification`
	///
	/// Returns `None` for properties with a dedicated record attribute, and for properties
	/// the specification has no key for.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::property::Property;
	/// use audiometa::specification::Specification;
	///
	/// assert_eq!(Property::Narrator.map_key(Specification::Id3v24), Some("TXXX:NARRATOR"));
	/// assert_eq!(Property::Narrator.map_key(Specification::Mp4), Some("©nrt"));
	/// assert_eq!(Property::Narrator.map_key(Specification::Ape), None);
	/// ```
	pub fn map_key(self, specification: Specification) -> Option<&'static str> {
		match specification {
			Specification::Id3v23 | Specification::Id3v24 => ID3V2_MAP.get_key(self),
			Specification::Mp4 => ILST_MAP.get_key(self),
			Specification::Matroska => MATROSKA_MAP.get_key(self),
			Specification::WindowsMediaAsf => ASF_MAP.get_key(self),
			Specification::Ape => APE_MAP.get_key(self),
			Specification::Vorbis => VORBIS_MAP.get_key(self),
			Specification::Undefined | Specification::Id3v1 | Specification::Aiff => None,
		}
	}

	/// Map an extension field key used by `specification` to a property, if one exists
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::property::Property;
	/// use audiometa::specification::Specification;
	///
	/// assert_eq!(Property::from_key(Specification::Mp4, "stik"), Some(Property::ItunesMediaType));
	/// assert_eq!(Property::from_key(Specification::Mp4, "TIT3"), None);
	/// ```
	pub fn from_key(specification: Specification, key: &str) -> Option<Self> {
		match specification {
			Specification::Id3v23 | Specification::Id3v24 => ID3V2_MAP.get_property(key),
			Specification::Mp4 => ILST_MAP.get_property(key),
			Specification::Matroska => MATROSKA_MAP.get_property(key),
			Specification::WindowsMediaAsf => ASF_MAP.get_property(key),
			Specification::Ape => APE_MAP.get_property(key),
			Specification::Vorbis => VORBIS_MAP.get_property(key),
			Specification::Undefined | Specification::Id3v1 | Specification::Aiff => None,
		}
	}
}
