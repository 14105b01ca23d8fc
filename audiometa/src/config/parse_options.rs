/// The parsing strictness mode
///
/// This controls how raw strings are converted into dates by
/// [`Record::set_from_string`](crate::record::Record::set_from_string), and can be set with
/// [`GlobalOptions::parsing_mode`](crate::config::GlobalOptions::parsing_mode).
///
/// # Examples
///
/// ```rust
/// use audiometa::config::{GlobalOptions, ParsingMode, apply_global_options};
///
/// // We only want to accept well-formed dates
/// let global_options = GlobalOptions::new().parsing_mode(ParsingMode::Strict);
/// apply_global_options(global_options);
/// ```
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum ParsingMode {
	/// Will eagerly error on invalid input
	///
	/// ## Examples of behavior
	///
	/// * A month written as `" 6"` - The timestamp is rejected
	/// * `2024-06-03 14:08:49` - The timestamp is rejected, a `T` is required before the time
	Strict,
	/// Default mode, less eager to error on recoverably malformed input
	///
	/// ## Examples of behavior
	///
	/// * A month written as `" 6"` or `"6"` - Read as June
	/// * `2024-06-03 14:08:49` - The space is accepted in place of the `T`
	#[default]
	BestAttempt,
	/// Least eager to error, may produce partial output
	///
	/// ## Examples of behavior
	///
	/// * A timestamp with out of range segments (ex. month 13) - Kept as-is rather than rejected
	Relaxed,
}
