use crate::config::global_options;
use crate::empty::{EmptyFlags, is_empty};
use crate::items::{Chapter, Picture};
use crate::property::{Property, Value};
use crate::record::{ExtensionMap, Record};

/// A property that differs between two records
///
/// Both sides hold the compared form of the value: empty values are `None`, pictures carry no
/// data, and the extension map leaves out fields backing mapped properties.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffEntry {
	/// The differing property
	pub property: Property,
	/// The value in the current record
	pub current: Option<Value>,
	/// The value in the candidate record
	pub candidate: Option<Value>,
}

impl DiffEntry {
	/// The same entry, seen from the other record
	pub fn reversed(self) -> Self {
		Self {
			property: self.property,
			current: self.candidate,
			candidate: self.current,
		}
	}
}

/// List the properties that differ between `current` and `candidate`
///
/// Entries are in [`Property::ALL`] order. A property that is empty on both sides is never
/// reported, even if the two empty forms differ.
///
/// With [`GlobalOptions::diff_excludes_mapped_fields`](crate::config::GlobalOptions::diff_excludes_mapped_fields)
/// set (the default), extension fields backing a mapped property for either record are left out
/// of the [`Property::AdditionalFields`] comparison, since the property itself is compared
/// already.
///
/// # Examples
///
/// ```rust
/// use audiometa::bulk::diff;
/// use audiometa::property::{Property, Value};
/// use audiometa::record::Record;
///
/// let mut current = Record::default();
/// current.set_title("Emma");
/// current.set_album("Novels");
///
/// let mut candidate = current.clone();
/// candidate.set_title("Persuasion");
/// candidate.remove_album();
///
/// let entries = diff(&current, &candidate);
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].property, Property::Album);
/// assert_eq!(entries[0].candidate, None);
/// assert_eq!(entries[1].property, Property::Title);
/// assert_eq!(entries[1].candidate, Some(Value::from("Persuasion")));
/// ```
pub fn diff(current: &Record, candidate: &Record) -> Vec<DiffEntry> {
	let exclude_mapped = unsafe { global_options().diff_excludes_mapped_fields };
	let is_excluded =
		|key: &str| exclude_mapped && (current.is_mapped_key(key) || candidate.is_mapped_key(key));

	let mut entries = Vec::new();
	for property in Property::iter() {
		let old = normalize(current.get(property), &is_excluded);
		let new = normalize(candidate.get(property), &is_excluded);

		if old == new {
			continue;
		}

		log::trace!("{property} differs: {old:?} -> {new:?}");
		entries.push(DiffEntry {
			property,
			current: old,
			candidate: new,
		});
	}

	entries
}

fn normalize<F>(value: Option<Value>, is_excluded: &F) -> Option<Value>
where
	F: Fn(&str) -> bool,
{
	let value = match value? {
		Value::Pictures(pictures) => {
			Value::Pictures(pictures.iter().map(Picture::without_data).collect())
		},
		Value::Chapters(chapters) => {
			Value::Chapters(chapters.iter().map(Chapter::without_picture_data).collect())
		},
		Value::Map(map) => Value::Map(
			map.iter()
				.filter(|(key, _)| !is_excluded(key))
				.collect::<ExtensionMap>(),
		),
		other => other,
	};

	if is_empty(Some(&value), EmptyFlags::ALL) {
		return None;
	}

	Some(value)
}

#[cfg(test)]
mod tests {
	use super::{DiffEntry, diff};
	use crate::bulk::overwrite;
	use crate::config::{GlobalOptions, apply_global_options};
	use crate::items::{Chapter, MimeType, Picture, Timestamp};
	use crate::property::{Property, Value};
	use crate::record::Record;
	use crate::specification::Specification;

	fn sample(spec: Specification) -> Record {
		let mut record = Record::new(spec);
		record.set_title("Moby Dick");
		record.set_artist("Herman Melville");
		record.set_recording_date(Timestamp::from_year(1851));
		record.set_part("4");
		record.set_from_string(Property::Narrator, "Frank Muller");
		record.extension_map_mut().insert("ASIN", "B000FC0PDA");
		record
	}

	#[test_log::test]
	fn identical_records() {
		let record = sample(Specification::Id3v24);
		assert!(diff(&record, &record.clone()).is_empty());
	}

	#[test_log::test]
	fn overwrite_then_diff_is_empty() {
		let src = sample(Specification::Id3v24);

		let mut dest = Record::new(Specification::Mp4);
		dest.set_title("Typee");
		dest.set_genre("Adventure");
		dest.extension_map_mut().insert("ISBN", "0142437247");

		overwrite(&mut dest, &src, &["ISBN"]);
		assert_eq!(diff(&dest, &src), Vec::new());
	}

	#[test_log::test]
	fn reversing_swaps_sides() {
		let a = sample(Specification::Id3v24);
		let mut b = sample(Specification::Mp4);
		b.set_title("Pierre");
		b.remove_artist();
		b.set_part("4.5");
		b.extension_map_mut().insert("ASIN", "B0000000");

		let forward = diff(&a, &b);
		let backward = diff(&b, &a);

		assert!(!forward.is_empty());
		assert_eq!(
			forward.into_iter().map(DiffEntry::reversed).collect::<Vec<_>>(),
			backward
		);
	}

	#[test_log::test]
	fn empty_forms_are_equal() {
		let mut a = Record::default();
		a.set_track_number(0);
		a.set_album("");

		let b = Record::default();
		assert!(diff(&a, &b).is_empty());
	}

	#[test_log::test]
	fn picture_data_ignored() {
		let picture = |data: &[u8]| {
			Picture::unchecked(data.to_vec())
				.mime_type(MimeType::Png)
				.build()
		};

		let mut a = Record::default();
		a.pictures_mut().push(picture(&[1, 2, 3]));

		let mut b = Record::default();
		b.pictures_mut().push(picture(&[4, 5, 6]));
		assert!(diff(&a, &b).is_empty());

		b.pictures_mut().clear();
		let entries = diff(&a, &b);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].property, Property::EmbeddedPictures);
		assert_eq!(entries[0].candidate, None);
	}

	#[test_log::test]
	fn chapters_compared_structurally() {
		let mut a = Record::default();
		a.chapters_mut().push(Chapter::new(0, 1000, "Loomings"));

		let mut b = a.clone();
		assert!(diff(&a, &b).is_empty());

		b.chapters_mut()[0].title = String::from("The Carpet-Bag");
		let entries = diff(&a, &b);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].property, Property::Chapters);
	}

	#[test_log::test]
	fn mapped_fields_reported_once() {
		let a = Record::new(Specification::Id3v24);
		let mut b = Record::new(Specification::Id3v24);
		b.set_from_string(Property::Subtitle, "or, The Whale");

		let entries = diff(&a, &b);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].property, Property::Subtitle);

		apply_global_options(GlobalOptions::new().diff_excludes_mapped_fields(false));
		let entries = diff(&a, &b);
		apply_global_options(GlobalOptions::default());

		assert_eq!(
			entries.iter().map(|e| e.property).collect::<Vec<_>>(),
			[Property::Subtitle, Property::AdditionalFields]
		);
		assert_eq!(
			entries[1].candidate,
			Some(Value::Map([("TIT3", "or, The Whale")].into_iter().collect()))
		);
	}
}
