use crate::specification::Specification;

use std::ffi::OsStr;
use std::path::Path;

/// List of common audio extensions
///
/// NOTE: This is **not** an exhaustive list, but it should work fine in most cases.
pub const EXTENSIONS: &[&str] = &[
	// Also update `FileType::from_ext()` below
	"aac", "ape", "aiff", "aif", "afc", "aifc", "mp3", "mp2", "mp1", "wav", "wv", "opus", "flac",
	"ogg", "mp4", "m4a", "m4b", "m4p", "m4r", "m4v", "3gp", "mpc", "mp+", "mpp", "spx", "mka",
	"mkv", "webm", "wma", "asf",
];

/// The audio container of a record
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[allow(missing_docs)]
#[non_exhaustive]
pub enum FileType {
	Aac,
	Aiff,
	Ape,
	Flac,
	Matroska,
	Mpeg,
	Mp4,
	Mpc,
	Opus,
	Vorbis,
	Speex,
	Wav,
	WavPack,
	Wma,
}

impl FileType {
	/// The [`Specification`] a container natively tags with, if it has one
	///
	/// Containers without a native tag format (ex. MP3) return `None`, and rely on
	/// the formats a codec reports as supported instead.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::file::FileType;
	/// use audiometa::specification::Specification;
	///
	/// assert_eq!(FileType::Flac.native_specification(), Some(Specification::Vorbis));
	/// assert_eq!(FileType::Mpeg.native_specification(), None);
	/// ```
	pub fn native_specification(&self) -> Option<Specification> {
		match self {
			FileType::Mp4 => Some(Specification::Mp4),
			FileType::Aiff => Some(Specification::Aiff),
			FileType::Flac | FileType::Vorbis | FileType::Opus | FileType::Speex => {
				Some(Specification::Vorbis)
			},
			FileType::Wma => Some(Specification::WindowsMediaAsf),
			FileType::Matroska => Some(Specification::Matroska),
			_ => None,
		}
	}

	/// Attempts to extract a [`FileType`] from an extension
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::file::FileType;
	///
	/// let extension = "M4B";
	/// assert_eq!(FileType::from_ext(extension), Some(FileType::Mp4));
	/// ```
	pub fn from_ext<E>(ext: E) -> Option<Self>
	where
		E: AsRef<OsStr>,
	{
		let ext = ext.as_ref().to_str()?.to_ascii_lowercase();

		// Also update `EXTENSIONS` above
		match ext.as_str() {
			"aac" => Some(Self::Aac),
			"ape" => Some(Self::Ape),
			"aiff" | "aif" | "afc" | "aifc" => Some(Self::Aiff),
			"mp3" | "mp2" | "mp1" => Some(Self::Mpeg),
			"wav" | "wave" => Some(Self::Wav),
			"wv" => Some(Self::WavPack),
			"opus" => Some(Self::Opus),
			"flac" => Some(Self::Flac),
			"ogg" => Some(Self::Vorbis),
			"mp4" | "m4a" | "m4b" | "m4p" | "m4r" | "m4v" | "3gp" => Some(Self::Mp4),
			"mpc" | "mp+" | "mpp" => Some(Self::Mpc),
			"spx" => Some(Self::Speex),
			"mka" | "mkv" | "webm" => Some(Self::Matroska),
			"wma" | "asf" => Some(Self::Wma),
			_ => None,
		}
	}

	/// Attempts to determine a [`FileType`] from a path
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::file::FileType;
	/// use std::path::Path;
	///
	/// let path = Path::new("path/to/my.mp3");
	/// assert_eq!(FileType::from_path(path), Some(FileType::Mpeg));
	/// ```
	pub fn from_path<P>(path: P) -> Option<Self>
	where
		P: AsRef<Path>,
	{
		let ext = path.as_ref().extension();
		ext.and_then(Self::from_ext)
	}
}
