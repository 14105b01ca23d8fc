//! Format-independent audio metadata properties.
//!
//! Audio files carry their metadata in a zoo of tag formats (ID3v2 frames, MP4 atoms, Vorbis
//! comments, APE items, ...), often several at once. This crate puts one typed vocabulary on top
//! of them: a [`Property`](property::Property) like `Narrator` is read and written the same way
//! regardless of whether it ends up in `TXXX:NARRATOR` or `©nrt`.
//!
//! The actual byte-level reading and writing is left to a [`TagCodec`](file::TagCodec). A
//! [`Record`](record::Record) holds what the codec found, and resolves which
//! [`Specification`](specification::Specification)s decide the extension field keys.
//!
//! # Examples
//!
//! ## Reading and writing properties
//!
//! ```rust
//! # fn main() -> audiometa::error::Result<()> {
//! use audiometa::property::{Property, Value};
//! use audiometa::record::Record;
//! use audiometa::specification::Specification;
//!
//! let mut record = Record::new(Specification::Mp4);
//!
//! record.set(Property::Title, Some(Value::from("The Hobbit")))?;
//! record.set_from_string(Property::Narrator, "Andy Serkis");
//!
//! // Mapped properties end up in the extension fields, under the key the format uses
//! assert_eq!(record.extension_map().get("©nrt"), Some("Andy Serkis"));
//!
//! // Removed properties read back as a removal value, not as nothing
//! record.remove(Property::Title);
//! assert_eq!(record.get(Property::Title), Some(Value::from("")));
//! # Ok(())
//! # }
//! ```
//!
//! ## Working with whole records
//!
//! ```rust
//! use audiometa::bulk::{diff, merge};
//! use audiometa::property::Property;
//! use audiometa::record::Record;
//!
//! let mut tagged = Record::default();
//! tagged.set_title("The Hobbit");
//!
//! let mut looked_up = Record::default();
//! looked_up.set_title("The Hobbit, or There and Back Again");
//! looked_up.set_artist("J. R. R. Tolkien");
//!
//! let changes = diff(&tagged, &looked_up);
//! assert_eq!(changes.len(), 2);
//!
//! // Only fill in the gaps
//! merge(&mut tagged, &looked_up);
//! assert_eq!(tagged.title(), Some("The Hobbit"));
//! assert_eq!(tagged.artist(), Some("J. R. R. Tolkien"));
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bulk;
pub mod config;
pub mod empty;
pub mod error;
pub mod file;
pub mod items;
pub(crate) mod macros;
pub mod property;
pub mod record;
pub mod specification;

pub mod prelude {
	//! A prelude for commonly used items in the library.
	//!
	//! This module is intended to be wildcard imported.
	//!
	//! ```rust
	//! use audiometa::prelude::*;
	//! ```

	pub use crate::file::TagCodec;
	pub use crate::property::{Property, Value};
	pub use crate::record::Record;
	pub use crate::specification::Specification;
}
