/// A three character language code, as specified by [ISO-639-2].
///
/// If the language is not known, [`UNKNOWN_LANGUAGE`] should be used.
///
/// [ISO-639-2]: https://en.wikipedia.org/wiki/List_of_ISO_639-2_codes.
pub type Lang = [u8; 3];

/// English language code
pub const ENGLISH: Lang = *b"eng";

/// Unknown/unspecified language
pub const UNKNOWN_LANGUAGE: Lang = *b"XXX";

/// The type of content stored in synchronized lyrics
#[derive(Copy, Clone, PartialEq, Debug, Eq, Hash, Default)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum LyricsContentType {
	Other = 0,
	#[default]
	Lyrics = 1,
	TextTranscription = 2,
	PartName = 3,
	Events = 4,
	Chord = 5,
	Trivia = 6,
	WebpageURL = 7,
	ImageURL = 8,
}

impl LyricsContentType {
	/// Get a `LyricsContentType` from a u8
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::LyricsContentType;
	///
	/// assert_eq!(LyricsContentType::from_u8(3), Some(LyricsContentType::PartName));
	/// assert_eq!(LyricsContentType::from_u8(9), None);
	/// ```
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Other),
			1 => Some(Self::Lyrics),
			2 => Some(Self::TextTranscription),
			3 => Some(Self::PartName),
			4 => Some(Self::Events),
			5 => Some(Self::Chord),
			6 => Some(Self::Trivia),
			7 => Some(Self::WebpageURL),
			8 => Some(Self::ImageURL),
			_ => None,
		}
	}
}

/// A single timed line of synchronized lyrics
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LyricsPhrase {
	/// Offset from the start of the track, in milliseconds
	pub timestamp_ms: u32,
	/// The text shown from this point on
	pub text: String,
}

/// Lyrics attached to a track
///
/// A track can carry a plain block of text, a list of timed phrases, or both.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lyrics {
	/// The language of the lyrics
	pub language: Lang,
	/// A short content description
	pub description: String,
	/// What the synchronized phrases represent
	pub content_type: LyricsContentType,
	/// The lyrics as a single block of text
	pub unsynchronized: String,
	/// Timed phrases, ordered by timestamp
	pub synchronized: Vec<LyricsPhrase>,
}

impl Default for Lyrics {
	fn default() -> Self {
		Self {
			language: UNKNOWN_LANGUAGE,
			description: String::new(),
			content_type: LyricsContentType::default(),
			unsynchronized: String::new(),
			synchronized: Vec::new(),
		}
	}
}

impl Lyrics {
	/// Create lyrics from a single block of text
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Lyrics;
	///
	/// let lyrics = Lyrics::unsynchronized("Is this the real life?");
	/// assert!(lyrics.synchronized.is_empty());
	/// ```
	pub fn unsynchronized(text: impl Into<String>) -> Self {
		Self {
			unsynchronized: text.into(),
			..Self::default()
		}
	}

	/// Whether there is neither text nor any timed phrase
	pub fn is_empty(&self) -> bool {
		self.unsynchronized.is_empty() && self.synchronized.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use crate::items::{Lyrics, LyricsPhrase};

	#[test_log::test]
	fn emptiness_requires_both_forms_missing() {
		assert!(Lyrics::default().is_empty());
		assert!(!Lyrics::unsynchronized("la la la").is_empty());

		let timed_only = Lyrics {
			synchronized: vec![LyricsPhrase {
				timestamp_ms: 1500,
				text: String::from("la"),
			}],
			..Lyrics::default()
		};
		assert!(!timed_only.is_empty());
	}
}
