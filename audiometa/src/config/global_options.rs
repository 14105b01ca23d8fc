use crate::config::ParsingMode;

use std::cell::UnsafeCell;

thread_local! {
	static GLOBAL_OPTIONS: UnsafeCell<GlobalOptions> = UnsafeCell::new(GlobalOptions::default());
}

pub(crate) unsafe fn global_options() -> &'static GlobalOptions {
	GLOBAL_OPTIONS.with(|global_options| unsafe { &*global_options.get() })
}

/// The ID3v2 version chosen for files that carry no tags yet
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum Id3v2Version {
	/// ID3v2.3
	V3,
	/// ID3v2.4
	#[default]
	V4,
}

/// Options that control all interactions with audiometa for the current thread
///
/// # Examples
///
/// ```rust
/// use audiometa::config::{GlobalOptions, Id3v2Version, apply_global_options};
///
/// // My players only understand ID3v2.3
/// let global_options = GlobalOptions::new().id3v2_version(Id3v2Version::V3);
/// apply_global_options(global_options);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq)]
#[non_exhaustive]
pub struct GlobalOptions {
	pub(crate) id3v2_version: Id3v2Version,
	pub(crate) parsing_mode: ParsingMode,
	pub(crate) diff_excludes_mapped_fields: bool,
}

impl GlobalOptions {
	/// Creates a new `GlobalOptions`, alias for `Default` implementation
	///
	/// See also: [`GlobalOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::config::GlobalOptions;
	///
	/// let global_options = GlobalOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			id3v2_version: Id3v2Version::V4,
			parsing_mode: ParsingMode::BestAttempt,
			diff_excludes_mapped_fields: true,
		}
	}

	/// The ID3v2 version to pick when a tag-less file supports ID3v2
	///
	/// See also: [`Record::specifications`](crate::record::Record::specifications)
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::config::{GlobalOptions, Id3v2Version, apply_global_options};
	///
	/// let global_options = GlobalOptions::new().id3v2_version(Id3v2Version::V3);
	/// apply_global_options(global_options);
	/// ```
	pub fn id3v2_version(&mut self, id3v2_version: Id3v2Version) -> Self {
		self.id3v2_version = id3v2_version;
		*self
	}

	/// The strictness used when converting strings into dates
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::config::{GlobalOptions, ParsingMode, apply_global_options};
	///
	/// let global_options = GlobalOptions::new().parsing_mode(ParsingMode::Relaxed);
	/// apply_global_options(global_options);
	/// ```
	pub fn parsing_mode(&mut self, parsing_mode: ParsingMode) -> Self {
		self.parsing_mode = parsing_mode;
		*self
	}

	/// Whether [`diff`](crate::bulk::diff) ignores extension entries that belong to mapped properties
	///
	/// Mapped properties (ex. `Narrator`, stored as `TXXX:NARRATOR` in ID3v2) already show up
	/// under their own [`Property`](crate::property::Property). Disabling this reports them a second
	/// time under [`Property::AdditionalFields`](crate::property::Property::AdditionalFields).
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::config::{GlobalOptions, apply_global_options};
	///
	/// let global_options = GlobalOptions::new().diff_excludes_mapped_fields(false);
	/// apply_global_options(global_options);
	/// ```
	pub fn diff_excludes_mapped_fields(&mut self, diff_excludes_mapped_fields: bool) -> Self {
		self.diff_excludes_mapped_fields = diff_excludes_mapped_fields;
		*self
	}
}

impl Default for GlobalOptions {
	/// The default implementation for `GlobalOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// GlobalOptions {
	/// 	id3v2_version: Id3v2Version::V4,
	/// 	parsing_mode: ParsingMode::BestAttempt,
	/// 	diff_excludes_mapped_fields: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

/// Applies the given `GlobalOptions` to the current thread
///
/// # Examples
///
/// ```rust
/// use audiometa::config::{GlobalOptions, apply_global_options};
///
/// let global_options = GlobalOptions::new().diff_excludes_mapped_fields(true);
/// apply_global_options(global_options);
/// ```
pub fn apply_global_options(options: GlobalOptions) {
	GLOBAL_OPTIONS.with(|global_options| unsafe {
		*global_options.get() = options;
	});
}
