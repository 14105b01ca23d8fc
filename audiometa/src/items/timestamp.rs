use crate::config::ParsingMode;
use crate::error::{ErrorKind, MetadataError, Result};
use crate::macros::{err, parse_mode_choice};

use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use byteorder::ReadBytesExt;

/// A subset of the ISO 8601 timestamp format
///
/// Segments are optional from the month onward. A timestamp that only carries a year
/// is valid, and is what tags commonly store for release years.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[allow(missing_docs)]
pub struct Timestamp {
	pub year: u16,
	pub month: Option<u8>,
	pub day: Option<u8>,
	pub hour: Option<u8>,
	pub minute: Option<u8>,
	pub second: Option<u8>,
}

impl PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Timestamp {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.year
			.cmp(&other.year)
			.then(self.month.cmp(&other.month))
			.then(self.day.cmp(&other.day))
			.then(self.hour.cmp(&other.hour))
			.then(self.minute.cmp(&other.minute))
			.then(self.second.cmp(&other.second))
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.write_with_time_separator(f, 'T')
	}
}

impl FromStr for Timestamp {
	type Err = MetadataError;

	fn from_str(s: &str) -> Result<Self> {
		Timestamp::parse(&mut s.as_bytes(), ParsingMode::BestAttempt)?
			.ok_or_else(|| MetadataError::new(ErrorKind::BadTimestamp("Timestamp is empty")))
	}
}

impl Timestamp {
	/// The maximum length of a timestamp in bytes
	pub const MAX_LENGTH: usize = 19;

	/// The earliest representable point in time, `0001-01-01T00:00:00`
	///
	/// A date property that has been removed reads back as this value.
	pub const MIN: Self = Self {
		year: 1,
		month: Some(1),
		day: Some(1),
		hour: Some(0),
		minute: Some(0),
		second: Some(0),
	};

	const SEPARATORS: [u8; 3] = [b'-', b'T', b':'];

	/// Create a timestamp pointing at January 1st of `year`
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Timestamp;
	///
	/// let timestamp = Timestamp::from_year(2021);
	/// assert_eq!(timestamp.to_string(), "2021-01-01");
	/// ```
	pub const fn from_year(year: u16) -> Self {
		Self {
			year,
			month: Some(1),
			day: Some(1),
			hour: None,
			minute: None,
			second: None,
		}
	}

	/// Whether this is [`Timestamp::MIN`]
	pub fn is_min(&self) -> bool {
		*self == Self::MIN
	}

	/// Render the timestamp the way extension fields store dates
	///
	/// This is `yyyy-MM-dd HH:mm:ss`, with a time of exactly midnight left off entirely.
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::items::Timestamp;
	///
	/// let mut timestamp = Timestamp::from_year(2021);
	/// assert_eq!(timestamp.to_spaced_string(), "2021-01-01");
	///
	/// timestamp.hour = Some(13);
	/// timestamp.minute = Some(5);
	/// timestamp.second = Some(0);
	/// assert_eq!(timestamp.to_spaced_string(), "2021-01-01 13:05:00");
	/// ```
	pub fn to_spaced_string(&self) -> String {
		let midnight = matches!(
			(self.hour, self.minute, self.second),
			(Some(0), Some(0) | None, Some(0) | None)
		);

		if midnight {
			let date_only = Self {
				hour: None,
				minute: None,
				second: None,
				..*self
			};
			return date_only.to_string();
		}

		SpacedTimestamp(self).to_string()
	}

	fn write_with_time_separator(
		&self,
		f: &mut std::fmt::Formatter<'_>,
		time_separator: char,
	) -> std::fmt::Result {
		write!(f, "{:04}", self.year)?;

		if let Some(month) = self.month {
			write!(f, "-{:02}", month)?;

			if let Some(day) = self.day {
				write!(f, "-{:02}", day)?;

				if let Some(hour) = self.hour {
					write!(f, "{time_separator}{:02}", hour)?;

					if let Some(minute) = self.minute {
						write!(f, ":{:02}", minute)?;

						if let Some(second) = self.second {
							write!(f, ":{:02}", second)?;
						}
					}
				}
			}
		}

		Ok(())
	}

	/// Read a [`Timestamp`]
	///
	/// NOTES:
	///
	/// * When not using [`ParsingMode::Strict`], this will skip any leading whitespace, and accept a
	///   space in place of the `T` separating the date and time
	/// * Afterwards, this will take [`Self::MAX_LENGTH`] bytes from the reader, anything past that
	///   (ex. a trailing `Z`) is ignored
	///
	/// # Errors
	///
	/// * Failure to read from `reader`
	/// * The timestamp is invalid
	pub fn parse<R>(reader: &mut R, parse_mode: ParsingMode) -> Result<Option<Self>>
	where
		R: Read,
	{
		macro_rules! read_segment {
			($expr:expr) => {
				match $expr {
					Ok((_, 0)) => break,
					Ok((val, _)) => Some(val as u8),
					Err(e) => return Err(e),
				}
			};
		}

		let mut c = match reader.read_u8() {
			Ok(val) => val,
			Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
				if parse_mode == ParsingMode::Strict {
					err!(BadTimestamp("Timestamp is empty"))
				}

				return Ok(None);
			},
			Err(e) => return Err(e.into()),
		};

		if parse_mode != ParsingMode::Strict {
			while c.is_ascii_whitespace() {
				c = match reader.read_u8() {
					Ok(val) => val,
					Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
					Err(e) => return Err(e.into()),
				};
			}
		}

		let mut timestamp = Timestamp::default();

		let mut content = Vec::with_capacity(Self::MAX_LENGTH);
		content.push(c);

		reader
			.take(Self::MAX_LENGTH as u64 - 1)
			.read_to_end(&mut content)?;

		// The "T" is ignored here, it is required regardless of the other separators
		let timestamp_contains_separators = content
			.iter()
			.any(|&b| b != b'T' && Self::SEPARATORS.contains(&b));

		let reader = &mut &content[..];

		// Only the year has a fixed width
		let (year, bytes_read) = Self::segment::<4>(reader, None, parse_mode)?;
		if bytes_read != 4 {
			err!(BadTimestamp(
				"Encountered an invalid year length (should be 4 digits)"
			))
		}

		timestamp.year = year;
		if reader.is_empty() {
			return Ok(Some(timestamp));
		}

		#[allow(clippy::never_loop)]
		loop {
			timestamp.month = read_segment!(Self::segment::<2>(
				reader,
				timestamp_contains_separators.then_some(b'-'),
				parse_mode
			));
			timestamp.day = read_segment!(Self::segment::<2>(
				reader,
				timestamp_contains_separators.then_some(b'-'),
				parse_mode
			));
			timestamp.hour = read_segment!(Self::segment::<2>(reader, Some(b'T'), parse_mode));
			timestamp.minute = read_segment!(Self::segment::<2>(
				reader,
				timestamp_contains_separators.then_some(b':'),
				parse_mode
			));
			timestamp.second = read_segment!(Self::segment::<2>(
				reader,
				timestamp_contains_separators.then_some(b':'),
				parse_mode
			));
			break;
		}

		parse_mode_choice!(
			parse_mode,
			RELAXED: {},
			DEFAULT: timestamp.verify()?
		);

		Ok(Some(timestamp))
	}

	fn segment<const SIZE: usize>(
		content: &mut &[u8],
		sep: Option<u8>,
		parse_mode: ParsingMode,
	) -> Result<(u16, usize)> {
		const STOP_PARSING: (u16, usize) = (0, 0);

		if content.is_empty() {
			return Ok(STOP_PARSING);
		}

		if let Some(sep) = sep {
			let byte = content.read_u8()?;

			// "2024-06-03 14:08:49" is how most non-ID3 formats store times
			let spaced_time = sep == b'T' && byte == b' ' && parse_mode != ParsingMode::Strict;
			if byte != sep && !spaced_time {
				if parse_mode == ParsingMode::Strict {
					err!(BadTimestamp("Expected a separator"))
				}
				return Ok(STOP_PARSING);
			}
		}

		if content.len() < SIZE {
			if parse_mode == ParsingMode::Strict {
				err!(BadTimestamp("Timestamp segment is too short"))
			}

			return Ok(STOP_PARSING);
		}

		let mut num = None;
		let mut byte_count = 0;
		for i in content[..SIZE].iter().copied() {
			// Zeros replaced by spaces, ex. " 6" for June
			if i == b' ' {
				if parse_mode == ParsingMode::Strict {
					err!(BadTimestamp("Timestamp contains spaces"))
				}

				byte_count += 1;
				continue;
			}

			if !i.is_ascii_digit() {
				// A missing leading zero, ex. "6-3". We are eating into the next separator.
				if sep.is_some()
					&& Self::SEPARATORS.contains(&i)
					&& parse_mode != ParsingMode::Strict
				{
					break;
				}

				err!(BadTimestamp(
					"Timestamp segment contains non-digit characters"
				))
			}

			num = Some(num.unwrap_or(0) * 10 + u16::from(i - b'0'));
			byte_count += 1;
		}

		let Some(parsed_num) = num else {
			return Ok(STOP_PARSING);
		};

		*content = &content[byte_count..];

		Ok((parsed_num, byte_count))
	}

	pub(crate) fn verify(&self) -> Result<()> {
		fn verify_field(field: Option<u8>, min: u8, max: u8, parent: bool) -> bool {
			match field {
				Some(field) => parent && (min..=max).contains(&field),
				None => true,
			}
		}

		if self.year > 9999
			|| !verify_field(self.month, 1, 12, true)
			|| !verify_field(self.day, 1, 31, self.month.is_some())
			|| !verify_field(self.hour, 0, 23, self.day.is_some())
			|| !verify_field(self.minute, 0, 59, self.hour.is_some())
			|| !verify_field(self.second, 0, 59, self.minute.is_some())
		{
			err!(BadTimestamp(
				"Timestamp contains segment(s) that exceed their limits"
			))
		}

		Ok(())
	}
}

struct SpacedTimestamp<'a>(&'a Timestamp);

impl Display for SpacedTimestamp<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.write_with_time_separator(f, ' ')
	}
}

#[cfg(test)]
mod tests {
	use crate::config::ParsingMode;
	use crate::items::Timestamp;

	fn afternoon() -> Timestamp {
		// 2021-11-05T16:42:07
		Timestamp {
			year: 2021,
			month: Some(11),
			day: Some(5),
			hour: Some(16),
			minute: Some(42),
			second: Some(7),
		}
	}

	#[test_log::test]
	fn full_timestamp() {
		let parsed =
			Timestamp::parse(&mut "2021-11-05T16:42:07".as_bytes(), ParsingMode::Strict).unwrap();
		assert_eq!(parsed, Some(afternoon()));
		assert_eq!(afternoon().to_string(), "2021-11-05T16:42:07");
	}

	#[test_log::test]
	fn space_instead_of_time_marker() {
		let content = "2021-11-05 16:42:07";

		assert!(Timestamp::parse(&mut content.as_bytes(), ParsingMode::Strict).is_err());

		let parsed = Timestamp::parse(&mut content.as_bytes(), ParsingMode::BestAttempt).unwrap();
		assert_eq!(parsed, Some(afternoon()));
	}

	#[test_log::test]
	fn trailing_zone_designator_ignored() {
		let parsed: Timestamp = "2021-11-05T16:42:07Z".parse().unwrap();
		assert_eq!(parsed, afternoon());
	}

	#[test_log::test]
	fn missing_leading_zeros() {
		let parsed =
			Timestamp::parse(&mut "2021-11-5T16:42:07".as_bytes(), ParsingMode::BestAttempt)
				.unwrap();
		assert_eq!(parsed, Some(afternoon()));
	}

	#[test_log::test]
	fn partial_timestamps() {
		let year_only: Timestamp = "1999".parse().unwrap();
		assert_eq!(
			year_only,
			Timestamp {
				year: 1999,
				..Timestamp::default()
			}
		);

		let date_only: Timestamp = "1999-04-30".parse().unwrap();
		assert_eq!(date_only.day, Some(30));
		assert_eq!(date_only.hour, None);
	}

	#[test_log::test]
	fn out_of_range_segments() {
		let content = "2021-13-05";

		assert!(Timestamp::parse(&mut content.as_bytes(), ParsingMode::BestAttempt).is_err());

		let relaxed = Timestamp::parse(&mut content.as_bytes(), ParsingMode::Relaxed).unwrap();
		assert_eq!(relaxed.and_then(|t| t.month), Some(13));
	}

	#[test_log::test]
	fn empty_input() {
		assert_eq!(
			Timestamp::parse(&mut "".as_bytes(), ParsingMode::BestAttempt).unwrap(),
			None
		);
		assert_eq!(
			Timestamp::parse(&mut "   ".as_bytes(), ParsingMode::BestAttempt).unwrap(),
			None
		);
		assert!(Timestamp::parse(&mut "".as_bytes(), ParsingMode::Strict).is_err());
	}

	#[test_log::test]
	fn minimum() {
		assert_eq!(Timestamp::MIN.to_string(), "0001-01-01T00:00:00");
		assert!(Timestamp::MIN.is_min());
		assert!(Timestamp::MIN < Timestamp::from_year(1970));
		assert!(!Timestamp::from_year(1).is_min());
	}

	#[test_log::test]
	fn spaced_rendering() {
		assert_eq!(afternoon().to_spaced_string(), "2021-11-05 16:42:07");

		let midnight = Timestamp {
			hour: Some(0),
			minute: Some(0),
			second: Some(0),
			..afternoon()
		};
		assert_eq!(midnight.to_spaced_string(), "2021-11-05");
	}
}
