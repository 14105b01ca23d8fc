//! Audio containers, tag containers, and the codec seam

mod codec;
mod file_type;
mod tag_format;

pub use codec::TagCodec;
pub use file_type::{EXTENSIONS, FileType};
pub use tag_format::{TagFormat, TagFormats, TagType};
