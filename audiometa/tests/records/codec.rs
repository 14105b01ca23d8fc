use crate::util::{LineCodec, temp_record_file};

use audiometa::error::ErrorKind;
use audiometa::file::{FileType, TagFormat};
use audiometa::property::{Property, Value};
use audiometa::record::Record;
use audiometa::specification::Specification;

#[test_log::test]
fn read_present_containers() {
	let (_dir, path) = temp_record_file(
		"dune.mp3",
		"@ID3v2.4\n@APEtag v2\n#title=Dune\nTXXX:NARRATOR=Scott Brick\nSubtitle=Book One\n",
	);

	let mut codec = LineCodec::new(TagFormat::id3v24());
	let record = Record::read_from_path(&path, &mut codec).unwrap();

	assert_eq!(codec.reads, 1);
	assert_eq!(record.file_type(), Some(FileType::Mpeg));
	assert_eq!(
		record.specifications(),
		[Specification::Id3v24, Specification::Ape]
	);
	assert_eq!(record.title(), Some("Dune"));
	assert_eq!(
		record.get(Property::Narrator),
		Some(Value::from("Scott Brick"))
	);

	// Not in the ID3v2 tag, found through APE
	assert_eq!(record.get(Property::Subtitle), Some(Value::from("Book One")));
}

#[test_log::test]
fn save_resolves_again() {
	let (_dir, path) = temp_record_file("untagged.mp3", "");

	let mut codec = LineCodec::new(TagFormat::id3v23());
	let mut record = Record::read_from_path(&path, &mut codec).unwrap();

	// Nothing present yet, so the single pick out of the supported containers applies
	assert!(record.tag_formats().present.is_empty());
	assert_eq!(record.specifications(), [Specification::Id3v24]);

	record.set_title("Children of Dune");
	record.set_from_string(Property::Narrator, "Scott Brick");
	record.save(&mut codec).unwrap();

	assert_eq!(codec.writes, 1);
	assert_eq!(record.specifications(), [Specification::Id3v23]);
	assert_eq!(record.tag_formats().supported, [TagFormat::id3v23()]);

	let reread = Record::read_from_path(&path, &mut codec).unwrap();
	assert_eq!(reread.title(), Some("Children of Dune"));
	assert_eq!(reread.specifications(), [Specification::Id3v23]);
	assert_eq!(
		reread.get(Property::Narrator),
		Some(Value::from("Scott Brick"))
	);
}

#[test_log::test]
fn native_container_wins_over_supported() {
	let (_dir, path) = temp_record_file("messiah.m4b", "");

	let mut codec = LineCodec::new(TagFormat::ape());
	let mut record = Record::read_from_path(&path, &mut codec).unwrap();
	assert_eq!(record.specifications(), [Specification::Mp4]);

	record.set_from_string(Property::ItunesMediaType, "Audiobook");
	assert_eq!(record.extension_map().get("stik"), Some("2"));
}

#[test_log::test]
fn save_without_path() {
	let mut codec = LineCodec::new(TagFormat::id3v24());
	let err = Record::default().save(&mut codec).unwrap_err();

	assert!(matches!(err.kind(), ErrorKind::NoPath));
	assert_eq!(codec.writes, 0);
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let mut codec = LineCodec::new(TagFormat::id3v24());

	let err = Record::read_from_path(dir.path().join("gone.mp3"), &mut codec).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
