use audiometa::error::MetadataError;
use audiometa::file::{TagCodec, TagFormat, TagFormats};
use audiometa::record::Record;

use std::fs::File;
use std::io::{BufRead as _, BufReader, Write as _};
use std::path::{Path, PathBuf};

/// A codec that stores a record as plain `key=value` lines
///
/// Lines starting with `@` name a tag container, `#title` holds the title and everything else
/// is an extension field. New files get `fallback` written to them.
pub struct LineCodec {
	pub fallback: TagFormat,
	pub supported: Vec<TagFormat>,
	pub reads: usize,
	pub writes: usize,
}

impl LineCodec {
	pub fn new(fallback: TagFormat) -> Self {
		Self {
			supported: vec![fallback.clone()],
			fallback,
			reads: 0,
			writes: 0,
		}
	}
}

fn format_by_name(name: &str) -> TagFormat {
	match name {
		"ID3v1.1" => TagFormat::id3v1(),
		"ID3v2.3" => TagFormat::id3v23(),
		"ID3v2.4" => TagFormat::id3v24(),
		"APEtag v2" => TagFormat::ape(),
		other => TagFormat::native(other),
	}
}

impl TagCodec for LineCodec {
	type Error = MetadataError;

	fn read(&mut self, path: &Path, record: &mut Record) -> Result<(), Self::Error> {
		self.reads += 1;

		let mut formats = TagFormats::new();
		formats.supported = self.supported.clone();

		let reader = BufReader::new(File::open(path)?);
		for line in reader.lines() {
			let line = line?;
			if let Some(name) = line.strip_prefix('@') {
				formats.present.push(format_by_name(name));
				continue;
			}

			let Some((key, value)) = line.split_once('=') else {
				continue;
			};

			if key == "#title" {
				record.set_title(value);
			} else {
				record.extension_map_mut().insert(key, value);
			}
		}

		record.set_tag_formats(formats);
		Ok(())
	}

	fn write(&mut self, path: &Path, record: &Record) -> Result<TagFormats, Self::Error> {
		self.writes += 1;

		let mut present = record.tag_formats().present.clone();
		if present.is_empty() {
			present.push(self.fallback.clone());
		}

		let mut file = File::create(path)?;
		for format in &present {
			writeln!(file, "@{}", format.name())?;
		}

		if let Some(title) = record.title() {
			writeln!(file, "#title={title}")?;
		}

		for (key, value) in record.extension_map().iter() {
			writeln!(file, "{key}={value}")?;
		}

		Ok(TagFormats {
			present,
			supported: Vec::new(),
		})
	}
}

/// Write `contents` to `name` inside a fresh temporary directory
pub fn temp_record_file(name: &str, contents: &str) -> (tempfile::TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join(name);
	std::fs::write(&path, contents).unwrap();

	(dir, path)
}
