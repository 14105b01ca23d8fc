//! Whole-record operations
//!
//! Everything here walks [`Property::ALL`] in declaration order. Part and Movement are copied
//! as a pair, slot by slot, so copying a record never runs them through the
//! [`Record::set_part`]/[`Record::set_movement`] transitions a second time.

mod diff;

pub use diff::{DiffEntry, diff};

use crate::empty::{EmptyFlags, is_empty};
use crate::property::{Property, Value};
use crate::record::Record;

/// Fill the empty properties of `dest` from `src`
///
/// A property of `dest` that holds a value is never changed.
///
/// # Examples
///
/// ```rust
/// use audiometa::bulk::merge;
/// use audiometa::record::Record;
///
/// let mut dest = Record::default();
/// dest.set_title("Dune");
///
/// let mut src = Record::default();
/// src.set_title("Dune Messiah");
/// src.set_artist("Frank Herbert");
///
/// merge(&mut dest, &src);
/// assert_eq!(dest.title(), Some("Dune"));
/// assert_eq!(dest.artist(), Some("Frank Herbert"));
/// ```
pub fn merge(dest: &mut Record, src: &Record) {
	for property in Property::iter() {
		match property {
			Property::Part => {
				if dest.part().is_none() {
					dest.put_part_slot(src.stored_part());
					dest.put_movement_slot(src.movement());
				} else if dest.movement().is_none() {
					dest.put_movement_slot(src.movement());
				}
			},
			Property::Movement => {},
			_ => {
				if is_empty(dest.get(property).as_ref(), EmptyFlags::ALL) {
					assign(dest, property, src.get(property));
				}
			},
		}
	}
}

/// Copy every non-empty property of `src` into `dest`
///
/// Properties that are empty in `src` leave `dest` untouched.
pub fn overwrite_when_not_empty(dest: &mut Record, src: &Record) {
	for property in Property::iter() {
		match property {
			Property::Part => {
				if src.part().is_some() {
					dest.put_part_slot(src.stored_part());
				}

				if let Some(movement) = src.movement() {
					dest.put_movement_slot(Some(movement));
				}
			},
			Property::Movement => {},
			_ => {
				let value = src.get(property);
				if !is_empty(value.as_ref(), EmptyFlags::ALL) {
					assign(dest, property, value);
				}
			},
		}
	}
}

/// Copy every property of `src` into `dest`, then drop `drop_keys` from the extension fields
///
/// Properties that are empty in `src` are removed from `dest`.
///
/// # Examples
///
/// ```rust
/// use audiometa::bulk::overwrite;
/// use audiometa::record::Record;
///
/// let mut dest = Record::default();
/// dest.set_title("Draft");
/// dest.set_genre("Fantasy");
///
/// let mut src = Record::default();
/// src.set_title("Final");
/// src.extension_map_mut().insert("ASIN", "B0012345");
/// src.extension_map_mut().insert("MOOD", "Calm");
///
/// overwrite(&mut dest, &src, &["MOOD"]);
/// assert_eq!(dest.title(), Some("Final"));
/// assert_eq!(dest.genre(), None);
/// assert_eq!(dest.extension_map().get("ASIN"), Some("B0012345"));
/// assert!(!dest.extension_map().contains_key("MOOD"));
/// ```
pub fn overwrite(dest: &mut Record, src: &Record, drop_keys: &[&str]) {
	for property in Property::iter() {
		match property {
			Property::Part => {
				dest.put_part_slot(src.stored_part());
				dest.put_movement_slot(src.movement());
			},
			Property::Movement => {},
			_ => assign(dest, property, src.get(property)),
		}
	}

	for key in drop_keys {
		if dest.extension_map_mut().remove(key).is_some() {
			log::trace!("Dropped extension field \"{key}\"");
		}
	}
}

/// Remove every property of `dest` that is not in `keep`
///
/// An empty `keep` removes everything. Keeping either [`Property::Part`] or
/// [`Property::Movement`] keeps the Part, which is written back once everything else is gone.
///
/// # Examples
///
/// ```rust
/// use audiometa::bulk::clear;
/// use audiometa::property::Property;
/// use audiometa::record::Record;
/// use audiometa::specification::Specification;
///
/// let mut record = Record::new(Specification::Id3v24);
/// record.set_title("Dune");
/// record.set_artist("Frank Herbert");
/// record.set_part("1.5");
///
/// clear(&mut record, &[Property::Title, Property::Movement]);
/// assert_eq!(record.title(), Some("Dune"));
/// assert_eq!(record.artist(), None);
/// assert_eq!(record.part(), Some("1.5"));
/// ```
pub fn clear(dest: &mut Record, keep: &[Property]) {
	let keep_part = keep.contains(&Property::Part) || keep.contains(&Property::Movement);
	let part = if keep_part { dest.get(Property::Part) } else { None };

	for property in Property::iter() {
		if keep.is_empty() || !keep.contains(&property) {
			dest.remove(property);
		}
	}

	assign(dest, Property::Part, part);
}

// Values read through `Record::get` always match the property's kind
fn assign(dest: &mut Record, property: Property, value: Option<Value>) {
	if let Err(e) = dest.set(property, value) {
		log::error!("Unable to copy {property}: {e}");
	}
}
