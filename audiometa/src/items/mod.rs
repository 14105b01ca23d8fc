//! Types for the values that properties can hold

mod chapter;
mod itunes;
mod lyrics;
mod picture;
mod timestamp;

pub use chapter::Chapter;
pub use itunes::{ItunesCompilation, ItunesMediaType, ItunesPlayGap};
pub use lyrics::{ENGLISH, Lang, Lyrics, LyricsContentType, LyricsPhrase, UNKNOWN_LANGUAGE};
pub use picture::{MimeType, Picture, PictureBuilder, PictureType};
pub use timestamp::Timestamp;
