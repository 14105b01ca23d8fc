use crate::items::{
	Chapter, ItunesCompilation, ItunesMediaType, ItunesPlayGap, Lyrics, Picture, Timestamp,
};
use crate::property::{EnumKind, ValueKind};
use crate::record::ExtensionMap;

/// The value of a [`Property`](crate::property::Property)
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub enum Value {
	String(String),
	Int(i32),
	Float(f32),
	DateTime(Timestamp),
	Compilation(ItunesCompilation),
	MediaType(ItunesMediaType),
	PlayGap(ItunesPlayGap),
	Lyrics(Lyrics),
	Chapters(Vec<Chapter>),
	Pictures(Vec<Picture>),
	Map(ExtensionMap),
}

impl Value {
	/// The [`ValueKind`] of this value
	pub fn kind(&self) -> ValueKind {
		match self {
			Value::String(_) => ValueKind::String,
			Value::Int(_) => ValueKind::Int,
			Value::Float(_) => ValueKind::Float,
			Value::DateTime(_) => ValueKind::DateTime,
			Value::Compilation(_) => ValueKind::Enum(EnumKind::Compilation),
			Value::MediaType(_) => ValueKind::Enum(EnumKind::MediaType),
			Value::PlayGap(_) => ValueKind::Enum(EnumKind::PlayGap),
			Value::Lyrics(_) => ValueKind::Lyrics,
			Value::Chapters(_) => ValueKind::ChapterList,
			Value::Pictures(_) => ValueKind::PictureList,
			Value::Map(_) => ValueKind::StringMap,
		}
	}

	/// The value a removed property of `kind` reads back as
	///
	/// | Kind          | Removal value       |
	/// |---------------|---------------------|
	/// | `String`      | `""`                |
	/// | `Int`         | `0`                 |
	/// | `Float`       | `0.0`               |
	/// | `DateTime`    | [`Timestamp::MIN`]  |
	/// | `ChapterList` | `[]`                |
	/// | `PictureList` | `[]`                |
	/// | `StringMap`   | `{}`                |
	/// | `Enum`        | `None`              |
	/// | `Lyrics`      | `None`              |
	pub fn removal(kind: ValueKind) -> Option<Self> {
		match kind {
			ValueKind::String => Some(Value::String(String::new())),
			ValueKind::Int => Some(Value::Int(0)),
			ValueKind::Float => Some(Value::Float(0.0)),
			ValueKind::DateTime => Some(Value::DateTime(Timestamp::MIN)),
			ValueKind::ChapterList => Some(Value::Chapters(Vec::new())),
			ValueKind::PictureList => Some(Value::Pictures(Vec::new())),
			ValueKind::StringMap => Some(Value::Map(ExtensionMap::new())),
			ValueKind::Enum(_) | ValueKind::Lyrics => None,
		}
	}

	/// Returns the text, if this is a [`Value::String`]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(s),
			_ => None,
		}
	}

	/// Returns the number, if this is a [`Value::Int`]
	pub fn as_int(&self) -> Option<i32> {
		match self {
			Value::Int(i) => Some(*i),
			_ => None,
		}
	}

	/// Returns the timestamp, if this is a [`Value::DateTime`]
	pub fn as_timestamp(&self) -> Option<Timestamp> {
		match self {
			Value::DateTime(t) => Some(*t),
			_ => None,
		}
	}
}

macro_rules! impl_from {
	($($ty:ty => $variant:ident),+ $(,)?) => {
		$(
			impl From<$ty> for Value {
				fn from(input: $ty) -> Self {
					Value::$variant(input)
				}
			}
		)+
	};
}

impl_from! {
	String => String,
	i32 => Int,
	f32 => Float,
	Timestamp => DateTime,
	ItunesCompilation => Compilation,
	ItunesMediaType => MediaType,
	ItunesPlayGap => PlayGap,
	Lyrics => Lyrics,
	Vec<Chapter> => Chapters,
	Vec<Picture> => Pictures,
	ExtensionMap => Map,
}

impl From<&str> for Value {
	fn from(input: &str) -> Self {
		Value::String(input.to_owned())
	}
}
