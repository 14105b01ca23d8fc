use crate::error::MetadataError;
use crate::file::TagFormats;
use crate::record::Record;

use std::path::Path;

/// The byte-level reader and writer behind a [`Record`]
///
/// audiometa never touches files itself. A `TagCodec` is handed a record to fill when
/// reading, and a record to serialize when writing.
///
/// # Examples
///
/// ```rust
/// use audiometa::error::MetadataError;
/// use audiometa::file::{TagCodec, TagFormat, TagFormats};
/// use audiometa::record::Record;
/// use std::path::Path;
///
/// struct NullCodec;
///
/// impl TagCodec for NullCodec {
/// 	type Error = MetadataError;
///
/// 	fn read(&mut self, _path: &Path, record: &mut Record) -> Result<(), Self::Error> {
/// 		record.set_tag_formats(TagFormats::new().supported(TagFormat::id3v24()));
/// 		Ok(())
/// 	}
///
/// 	fn write(&mut self, _path: &Path, _record: &Record) -> Result<TagFormats, Self::Error> {
/// 		Ok(TagFormats::new().present(TagFormat::id3v24()))
/// 	}
/// }
/// ```
pub trait TagCodec {
	/// The codec's error type
	type Error: From<std::io::Error> + From<MetadataError>;

	/// Read the tags at `path` into `record`
	///
	/// Implementations are expected to report the tag containers they found through
	/// [`Record::set_tag_formats`].
	///
	/// # Errors
	///
	/// Any error the codec encounters while reading
	fn read(&mut self, path: &Path, record: &mut Record) -> Result<(), Self::Error>;

	/// Write `record` to `path`
	///
	/// Returns the tag containers now present in the file.
	///
	/// # Errors
	///
	/// Any error the codec encounters while writing
	fn write(&mut self, path: &Path, record: &Record) -> Result<TagFormats, Self::Error>;
}
