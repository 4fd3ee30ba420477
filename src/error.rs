/*! Error reporting.

All recoverable failures in the crate funnel through one [`Error`] enum.
Conditions that indicate programmer error – indexing through `Index` with an
out-of-bounds position, or exceeding the allocator's capacity – panic
instead, matching the standard containers.
!*/

use thiserror::Error;

/// Result type for fallible bit-array operations.
pub type Result<T> = core::result::Result<T, Error>;

/// The ways a bit-array operation can fail.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
	/// An index fell outside `[0, len)` after negative-index wrapping.
	#[error("bit index {index} out of range for length {len}")]
	OutOfRange {
		/// The index as given, before wrapping.
		index: isize,
		/// The length of the sequence it was applied to.
		len: usize,
	},

	/// A character other than `'0'`, `'1'`, or an ignored separator appeared
	/// in textual input.
	#[error("unexpected character {0:?}, expected '0' or '1'")]
	BadChar(char),

	/// An integer bit value was neither 0 nor 1.
	#[error("bit value must be 0 or 1, got {0}")]
	BadBit(u8),

	/// A bit-order string was neither `"little"` nor `"big"`.
	#[error("bit order must be \"little\" or \"big\", got {0:?}")]
	BadOrder(String),

	/// A stride was given a step of zero.
	#[error("stride step cannot be zero")]
	ZeroStep,

	/// A stepped splice was attempted with mismatched lengths.
	#[error("cannot splice {src} bits into a stride of length {dst}")]
	LengthMismatch {
		/// The length of the replacement sequence.
		src: usize,
		/// The number of positions selected by the stride.
		dst: usize,
	},

	/// A search for a value or pattern required to be present found nothing.
	#[error("value not found in bit sequence")]
	NotFound,

	/// A repetition product exceeded the index space.
	#[error("repeating {bits} bits {count} times overflows the index space")]
	Overflow {
		/// The length of the sequence being repeated.
		bits: usize,
		/// The requested repetition count.
		count: usize,
	},
}
