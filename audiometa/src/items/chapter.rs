use crate::items::Picture;

use std::time::Duration;

/// A chapter marker
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Chapter {
	/// Start offset in milliseconds
	pub start_ms: u32,
	/// End offset in milliseconds
	pub end_ms: u32,
	/// The chapter title
	pub title: String,
	/// The chapter subtitle
	pub subtitle: String,
	/// An identifier unique within the chapter list
	pub unique_id: String,
	/// A link associated with the chapter
	pub url: Option<String>,
	/// An image shown while the chapter plays
	pub picture: Option<Picture>,
}

impl Chapter {
	/// Create a chapter spanning `start_ms..end_ms`
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Chapter;
	/// use std::time::Duration;
	///
	/// let chapter = Chapter::new(0, 90_000, "Prologue");
	/// assert_eq!(chapter.duration(), Duration::from_secs(90));
	/// ```
	pub fn new(start_ms: u32, end_ms: u32, title: impl Into<String>) -> Self {
		Self {
			start_ms,
			end_ms,
			title: title.into(),
			..Self::default()
		}
	}

	/// The length of the chapter
	///
	/// A chapter ending before it starts has no length.
	pub fn duration(&self) -> Duration {
		Duration::from_millis(u64::from(self.end_ms.saturating_sub(self.start_ms)))
	}

	pub(crate) fn without_picture_data(&self) -> Self {
		Self {
			picture: self.picture.as_ref().map(Picture::without_data),
			..self.clone()
		}
	}
}
