use audiometa::file::{TagFormat, TagFormats};
use audiometa::items::{ItunesCompilation, ItunesPlayGap, Timestamp};
use audiometa::property::{Property, Value, ValueKind};
use audiometa::record::{PartState, Record};
use audiometa::specification::Specification;

#[test_log::test]
fn every_property_reads_removal_value_after_removal() {
	for spec in [
		Specification::Undefined,
		Specification::Id3v24,
		Specification::Mp4,
		Specification::Vorbis,
	] {
		let mut record = Record::new(spec);
		record.set_title("Something");
		record.set_part("3");
		record.set_from_string(Property::Bpm, "120");
		assert_eq!(
			record.extension_map().is_empty(),
			spec == Specification::Undefined,
			"{spec:?}"
		);

		for property in Property::iter() {
			record.set(property, None).unwrap();
			assert_eq!(
				record.get(property),
				Value::removal(property.value_kind()),
				"{property} in {spec:?}"
			);
		}

		assert!(record.extension_map().is_empty());
	}
}

#[test_log::test]
fn extension_backed_properties_need_a_specification() {
	let mut record = Record::new(Specification::Undefined);
	assert!(record.specifications().is_empty());

	record.set_from_string(Property::Narrator, "Kate Reading");
	record.set_from_string(Property::Subtitle, "Book Two");
	record.set_part("Interlude");

	assert!(record.extension_map().is_empty());
	assert_eq!(record.get(Property::Narrator), Some(Value::from("")));
	assert_eq!(record.get(Property::Subtitle), Some(Value::from("")));
	assert_eq!(record.part_state(), PartState::Unset);

	// Detected containers bring the keys back
	record.set_tag_formats(TagFormats::new().present(TagFormat::id3v24()));
	record.set_from_string(Property::Narrator, "Kate Reading");
	assert_eq!(
		record.get(Property::Narrator),
		Some(Value::from("Kate Reading"))
	);
}

#[test_log::test]
fn part_and_movement_remove_to_empty_string() {
	for property in [Property::Part, Property::Movement] {
		let mut record = Record::default();
		record.set_part("1");
		record.remove(property);

		assert_eq!(record.get(Property::Part), Some(Value::from("")));
		assert_eq!(record.get(Property::Movement), Some(Value::from("")));
		assert_eq!(record.part_state(), PartState::Unset);
	}
}

#[test_log::test]
fn narrator_per_specification() {
	let mut id3 = Record::new(Specification::Id3v24);
	id3.set_from_string(Property::Narrator, "Jim Narrator");
	assert_eq!(id3.extension_map().get("TXXX:NARRATOR"), Some("Jim Narrator"));

	let mut mp4 = Record::new(Specification::Mp4);
	mp4.set_from_string(Property::Narrator, "Jim Narrator");
	assert_eq!(mp4.extension_map().get("©nrt"), Some("Jim Narrator"));
}

#[test_log::test]
fn property_names_round_trip() {
	for property in Property::iter() {
		assert_eq!(property.name().parse::<Property>().unwrap(), property);
		assert_eq!(
			property.to_string().to_uppercase().parse::<Property>().unwrap(),
			property
		);
	}
}

#[test_log::test]
fn removed_date_is_minimum() {
	let mut record = Record::new(Specification::Id3v24);
	record.set_from_string(Property::RecordingDate, "1965-08-01T12:00:00");
	assert_eq!(
		record.get(Property::RecordingDate),
		Some(Value::DateTime(
			"1965-08-01T12:00:00".parse::<Timestamp>().unwrap()
		))
	);

	record.remove(Property::RecordingDate);
	assert_eq!(
		record.get(Property::RecordingDate),
		Some(Value::DateTime(Timestamp::MIN))
	);
}

#[test_log::test]
fn enums_through_every_container() {
	let mut record = Record::default();
	record.set_tag_formats(
		TagFormats::new()
			.present(TagFormat::native("Native tagging / Vorbis (OGG)"))
			.present(TagFormat::ape()),
	);
	record.set_file_type(Some(audiometa::file::FileType::Flac));
	assert_eq!(
		record.specifications(),
		[Specification::Vorbis, Specification::Ape]
	);

	record
		.set(
			Property::ItunesCompilation,
			Some(Value::Compilation(ItunesCompilation::Yes)),
		)
		.unwrap();
	assert_eq!(record.extension_map().get("COMPILATION"), Some("1"));
	assert_eq!(record.extension_map().get("Compilation"), Some("1"));

	// No key for it in either container
	record
		.set(
			Property::ItunesPlayGap,
			Some(Value::PlayGap(ItunesPlayGap::NoGap)),
		)
		.unwrap();
	assert_eq!(record.get(Property::ItunesPlayGap), None);
	assert_eq!(record.extension_map().len(), 2);
}

#[test_log::test]
fn value_kinds_are_enforced() {
	let mut record = Record::default();
	for property in Property::iter() {
		let wrong = match property.value_kind() {
			ValueKind::String => Value::Int(1),
			_ => Value::from("text"),
		};

		assert!(record.set(property, Some(wrong)).is_err(), "{property}");
	}
}
