use std::fmt::{Debug, Formatter};

/// An ordered map of extension fields
///
/// Extension fields hold everything a record has no dedicated attribute for, keyed by the
/// format-specific field name (ex. `TXXX:NARRATOR` or `©nrt`). Keys are unique, and
/// replacing a value keeps its position.
///
/// Two maps are equal when they hold the same entries, regardless of order.
#[derive(Clone, Default)]
pub struct ExtensionMap {
	entries: Vec<(String, String)>,
}

impl ExtensionMap {
	/// Create an empty `ExtensionMap`
	pub fn new() -> Self {
		Self::default()
	}

	/// The number of entries
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the map has no entries
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Get the value stored under `key`
	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Whether `key` is present
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Insert a value, returning the one it replaced
	///
	/// # Examples
	///
	/// ```rust
	/// use audiometa::record::ExtensionMap;
	///
	/// let mut map = ExtensionMap::new();
	/// map.insert("TXXX:NARRATOR", "Jim Dale");
	/// map.insert("TBPM", "120");
	///
	/// let old = map.insert("TXXX:NARRATOR", "Stephen Fry");
	/// assert_eq!(old.as_deref(), Some("Jim Dale"));
	///
	/// // Replacing keeps the original position
	/// assert_eq!(map.keys().next(), Some("TXXX:NARRATOR"));
	/// ```
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
		let key = key.into();
		let value = value.into();

		if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
			return Some(std::mem::replace(existing, value));
		}

		self.entries.push((key, value));
		None
	}

	/// Remove `key`, returning its value
	pub fn remove(&mut self, key: &str) -> Option<String> {
		let pos = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(pos).1)
	}

	/// Retain only the entries for which `f` returns `true`
	pub fn retain<F>(&mut self, mut f: F)
	where
		F: FnMut(&str, &str) -> bool,
	{
		self.entries.retain(|(k, v)| f(k, v));
	}

	/// Remove every entry
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// An iterator over the entries, in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// An iterator over the keys, in insertion order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(k, _)| k.as_str())
	}
}

impl PartialEq for ExtensionMap {
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
	}
}

impl Eq for ExtensionMap {}

impl Debug for ExtensionMap {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K, V> FromIterator<(K, V)> for ExtensionMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K, V> Extend<(K, V)> for ExtensionMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
		for (k, v) in iter {
			self.insert(k, v);
		}
	}
}

impl IntoIterator for ExtensionMap {
	type Item = (String, String);
	type IntoIter = std::vec::IntoIter<(String, String)>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
