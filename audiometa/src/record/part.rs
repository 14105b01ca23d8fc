//! Part and Movement share one consistency rule
//!
//! The Part lives in the extension fields (ex. `TXXX:PART`), while the Movement has a slot of
//! its own. An integer Part is mirrored into the Movement, anything else leaves the Movement
//! alone.

use crate::property::{Property, Value};
use crate::record::Record;

/// The combined state of [`Property::Part`] and [`Property::Movement`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartState {
	/// Neither is set
	Unset,
	/// The Movement holds this number, and the Part mirrors it
	Integer(i32),
	/// The Part holds free-form text, the Movement is unset
	Text(String),
}

/// The outcome of a Movement write
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum MovementUpdate {
	Cleared,
	Stored(i32),
	Rejected,
}

impl Record {
	/// The Part, falling back to the Movement
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::record::Record;
	/// use audiometa::specification::Specification;
	///
	/// let mut record = Record::new(Specification::Id3v24);
	///
	/// record.set_movement("3");
	/// assert_eq!(record.part(), Some("3"));
	///
	/// record.set_part("3.1");
	/// assert_eq!(record.part(), Some("3.1"));
	/// ```
	pub fn part(&self) -> Option<&str> {
		self.stored_part().or_else(|| self.movement())
	}

	/// The Movement
	///
	/// Unlike [`Record::part`], this never falls back.
	pub fn movement(&self) -> Option<&str> {
		self.movement.as_deref()
	}

	/// The combined Part/Movement state
	pub fn part_state(&self) -> PartState {
		let Some(part) = self.part() else {
			return PartState::Unset;
		};

		match part.trim().parse::<i32>() {
			Ok(n) => PartState::Integer(n),
			Err(_) => PartState::Text(part.to_owned()),
		}
	}

	/// Set the Part
	///
	/// The text is stored verbatim under the Part key of every active specification. If it is
	/// a whole number, the Movement is set to it as well, otherwise the Movement is left as it
	/// was. An empty string clears both.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::record::Record;
	/// use audiometa::specification::Specification;
	///
	/// let mut record = Record::new(Specification::Id3v24);
	///
	/// record.set_part("1");
	/// assert_eq!(record.movement(), Some("1"));
	///
	/// record.set_part("2.1");
	/// assert_eq!(record.part(), Some("2.1"));
	/// assert_eq!(record.movement(), Some("1"));
	/// ```
	pub fn set_part(&mut self, part: &str) {
		if part.is_empty() {
			self.clear_part_and_movement();
			return;
		}

		self.write_extension(Property::Part, Some(&Value::String(part.to_owned())));
		self.update_movement(part);
	}

	/// Set the Movement
	///
	/// Only whole numbers are accepted, and are stored in canonical form (`"007"` becomes
	/// `"7"`). Anything else is ignored and the current state is kept, with a warning logged.
	/// An empty string clears both the Movement and the Part.
	///
	/// A stored Part is left as is, use [`Record::set_part`] to change both.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::record::Record;
	///
	/// let mut record = Record::default();
	///
	/// record.set_movement("007");
	/// assert_eq!(record.movement(), Some("7"));
	///
	/// record.set_movement("Allegro");
	/// assert_eq!(record.movement(), Some("7"));
	/// ```
	pub fn set_movement(&mut self, movement: &str) {
		if self.update_movement(movement) == MovementUpdate::Rejected {
			log::warn!("Ignoring non-numeric movement \"{movement}\"");
		}
	}

	// Never writes the Part, an empty string aside
	fn update_movement(&mut self, movement: &str) -> MovementUpdate {
		if movement.is_empty() {
			self.clear_part_and_movement();
			return MovementUpdate::Cleared;
		}

		let Ok(n) = movement.trim().parse::<i32>() else {
			return MovementUpdate::Rejected;
		};

		self.movement = Some(n.to_string());
		MovementUpdate::Stored(n)
	}

	// Slot-wise access for copying the pair between records without running the transitions

	pub(crate) fn stored_part(&self) -> Option<&str> {
		self.read_extension_raw(Property::Part).filter(|p| !p.is_empty())
	}

	pub(crate) fn put_part_slot(&mut self, part: Option<&str>) {
		let part = part.map(|p| Value::String(p.to_owned()));
		self.write_extension(Property::Part, part.as_ref());
	}

	pub(crate) fn put_movement_slot(&mut self, movement: Option<&str>) {
		self.movement = movement.map(str::to_owned);
	}

	pub(crate) fn clear_part_and_movement(&mut self) {
		self.write_extension(Property::Part, None);
		self.movement = None;
	}
}

#[cfg(test)]
mod tests {
	use crate::property::{Property, Value};
	use crate::record::{PartState, Record};
	use crate::specification::Specification;

	#[test_log::test]
	fn integer_part_mirrors_movement() {
		let mut record = Record::new(Specification::Id3v24);
		record.set_part("1");

		assert_eq!(record.part(), Some("1"));
		assert_eq!(record.movement(), Some("1"));
		assert_eq!(record.part_state(), PartState::Integer(1));
	}

	#[test_log::test]
	fn text_part_leaves_movement_unset() {
		let mut record = Record::new(Specification::Id3v24);
		record.set_part("2.1");

		assert_eq!(record.part(), Some("2.1"));
		assert_eq!(record.movement(), None);
		assert_eq!(record.get(Property::Movement), Some(Value::from("")));
		assert_eq!(record.part_state(), PartState::Text(String::from("2.1")));
	}

	#[test_log::test]
	fn removing_part_clears_both() {
		let mut record = Record::new(Specification::Id3v24);
		record.set_part("1");
		record.remove(Property::Part);

		assert_eq!(record.get(Property::Part), Some(Value::from("")));
		assert_eq!(record.get(Property::Movement), Some(Value::from("")));
		assert_eq!(record.part_state(), PartState::Unset);
	}

	#[test_log::test]
	fn removing_movement_clears_part() {
		let mut record = Record::new(Specification::Id3v24);
		record.set_part("Book One");
		record.set_movement("1");
		assert_eq!(record.part(), Some("Book One"));
		assert_eq!(record.movement(), Some("1"));

		record.remove(Property::Movement);
		assert_eq!(record.part(), None);
		assert_eq!(record.movement(), None);
		assert!(!record.extension_map().contains_key("TXXX:PART"));
	}

	#[test_log::test]
	fn rejected_movement_keeps_state() {
		let mut record = Record::default();
		record.set_movement("4");
		record
			.set(Property::Movement, Some(Value::from("IV")))
			.unwrap();

		assert_eq!(record.movement(), Some("4"));
		assert_eq!(record.part(), Some("4"));
	}

	#[test_log::test]
	fn integer_part_canonical_movement() {
		let mut record = Record::new(Specification::Mp4);
		record.set_part("08");

		assert_eq!(record.movement(), Some("8"));
		assert_eq!(
			record.extension_map().get("----:com.pilabor.tone:PART"),
			Some("08")
		);
	}

	#[test_log::test]
	fn text_part_needs_a_specification() {
		let mut record = Record::default();
		record.set_part("2.1");
		assert_eq!(record.part(), None);
		assert!(record.extension_map().is_empty());

		record.set_part("2");
		assert_eq!(record.part(), Some("2"));
		assert_eq!(record.part_state(), PartState::Integer(2));
	}

	#[test_log::test]
	fn part_written_to_every_container() {
		let mut record = Record::default();
		record.set_tag_formats(
			crate::file::TagFormats::new()
				.present(crate::file::TagFormat::id3v23())
				.present(crate::file::TagFormat::ape()),
		);

		record.set_part("3");
		assert_eq!(record.extension_map().get("TXXX:PART"), Some("3"));
		// APE has no Part field
		assert_eq!(record.extension_map().len(), 1);
	}
}
