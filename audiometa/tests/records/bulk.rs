use audiometa::bulk::{DiffEntry, clear, diff, merge, overwrite, overwrite_when_not_empty};
use audiometa::empty::{EmptyFlags, is_empty};
use audiometa::items::{Chapter, Lyrics, MimeType, Picture, PictureType, Timestamp};
use audiometa::property::{Property, Value};
use audiometa::record::Record;
use audiometa::specification::Specification;

fn audiobook(spec: Specification) -> Record {
	let mut record = Record::new(spec);
	record.set_title("Leviathan Wakes");
	record.set_album("The Expanse");
	record.set_artist("James S. A. Corey");
	record.set_genre("Science Fiction");
	record.set_disc_number(1);
	record.set_popularity(4.5);
	record.set_publishing_date(Timestamp::from_year(2011));
	record.set_lyrics(Lyrics::unsynchronized("Chapter one"));
	record.set_part("1");
	record.set_movement_name("The Expanse");
	record.set_from_string(Property::Narrator, "Jefferson Mays");
	record.set_from_string(Property::Subtitle, "Book One");
	record.set_from_string(Property::PurchaseDate, "2012-02-14");
	record.chapters_mut().push(Chapter::new(0, 600_000, "Prologue: Julie"));
	record.pictures_mut().push(
		Picture::unchecked(vec![0x89, b'P', b'N', b'G'])
			.pic_type(PictureType::CoverFront)
			.mime_type(MimeType::Png)
			.build(),
	);
	record.extension_map_mut().insert("ASIN", "B0047Y171G");
	record
}

#[test_log::test]
fn merge_only_fills_gaps() {
	let mut dest = Record::new(Specification::Id3v24);
	dest.set_title("Caliban's War");
	dest.set_popularity(3.0);
	let before = dest.clone();

	merge(&mut dest, &audiobook(Specification::Mp4));

	for property in Property::iter() {
		let prior = before.get(property);
		if !is_empty(prior.as_ref(), EmptyFlags::ALL) {
			assert_eq!(dest.get(property), prior, "{property}");
		}
	}

	assert_eq!(dest.album(), Some("The Expanse"));
	assert_eq!(dest.extension_map().get("TXXX:NARRATOR"), Some("Jefferson Mays"));
	assert_eq!(dest.part(), Some("1"));
	assert_eq!(dest.pictures().len(), 1);
}

#[test_log::test]
fn overwrite_when_not_empty_leaves_gaps_alone() {
	let mut dest = audiobook(Specification::Id3v24);
	let before = dest.clone();

	let mut src = Record::new(Specification::Id3v24);
	src.set_title("Abaddon's Gate");
	src.set_disc_number(3);

	overwrite_when_not_empty(&mut dest, &src);

	for property in Property::iter() {
		if is_empty(src.get(property).as_ref(), EmptyFlags::ALL) {
			assert_eq!(dest.get(property), before.get(property), "{property}");
		}
	}

	assert_eq!(dest.title(), Some("Abaddon's Gate"));
	assert_eq!(dest.disc_number(), Some(3));
}

#[test_log::test]
fn overwrite_then_diff_is_empty_across_specifications() {
	for (dest_spec, src_spec) in [
		(Specification::Id3v24, Specification::Id3v24),
		(Specification::Mp4, Specification::Id3v24),
		(Specification::Vorbis, Specification::Vorbis),
	] {
		let src = audiobook(src_spec);

		let mut dest = Record::new(dest_spec);
		dest.set_comment("Scratch");
		dest.set_from_string(Property::Bpm, "90");

		overwrite(&mut dest, &src, &[]);
		assert_eq!(diff(&dest, &src), Vec::new(), "{dest_spec:?} <- {src_spec:?}");
	}
}

#[test_log::test]
fn diff_is_symmetric() {
	let a = audiobook(Specification::Id3v24);

	let mut b = audiobook(Specification::Mp4);
	b.set_title("Cibola Burn");
	b.remove_lyrics();
	b.set_part("4.5");
	b.chapters_mut().clear();
	b.extension_map_mut().insert("ASIN", "B00CKX9Y4S");
	b.extension_map_mut().insert("MOOD", "Tense");

	// ID3v2 has no purchase date, and a non-numeric part keeps the movement
	let forward = diff(&a, &b);
	let mut backward = diff(&b, &a);
	assert!(!forward.is_empty());

	backward = backward.into_iter().map(DiffEntry::reversed).collect();
	assert_eq!(forward, backward);

	let changed = forward.iter().map(|e| e.property).collect::<Vec<_>>();
	assert_eq!(
		changed,
		[
			Property::Lyrics,
			Property::Part,
			Property::PurchaseDate,
			Property::Title,
			Property::Chapters,
			Property::AdditionalFields,
		]
	);
}

#[test_log::test]
fn clear_with_keep_list() {
	let mut record = audiobook(Specification::Mp4);
	clear(
		&mut record,
		&[Property::Title, Property::Movement, Property::Narrator],
	);

	assert_eq!(record.title(), Some("Leviathan Wakes"));
	assert_eq!(record.part(), Some("1"));
	assert_eq!(record.movement(), Some("1"));
	assert_eq!(
		record.get(Property::Narrator),
		Some(Value::from("Jefferson Mays"))
	);

	assert_eq!(record.album(), None);
	assert!(record.pictures().is_empty());
	assert!(!record.extension_map().contains_key("ASIN"));
	assert_eq!(record.get(Property::PurchaseDate), Some(Value::DateTime(Timestamp::MIN)));
}

#[test_log::test]
fn clear_without_keep_list() {
	let mut record = audiobook(Specification::Vorbis);
	clear(&mut record, &[]);

	assert!(record.extension_map().is_empty());
	for property in Property::iter() {
		assert!(
			is_empty(record.get(property).as_ref(), EmptyFlags::ALL),
			"{property}"
		);
	}
}
