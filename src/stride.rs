/*! Extended-slice index arithmetic.

Region selection on a [`BitArray`] goes beyond contiguous ranges: a stride
selects every `step`-th bit between optional endpoints, with negative
indices counting back from the end of the sequence and a negative step
walking the selection in reverse.

[`Stride`] is the unresolved form, carrying exactly what the caller wrote.
Resolution against a concrete length clamps the endpoints, wraps negative
indices, and computes the number of selected positions, producing the
crate-internal [`Indices`] value the region operations consume.

[`BitArray`]: crate::BitArray
!*/

use core::ops::{
	Range,
	RangeFrom,
	RangeFull,
	RangeInclusive,
	RangeTo,
	RangeToInclusive,
};

use crate::error::{
	Error,
	Result,
};

/** A selection of positions in a bit sequence.

Either endpoint may be omitted, in which case it defaults to the appropriate
end of the sequence for the sign of `step`. Negative endpoints count back
from the end. The step must be nonzero; this is checked at resolution, not
at construction, so `Stride` values can be built in `const` contexts.

# Examples

```rust
use bitarray::Stride;

let every_other = Stride::from(..).with_step(2);
let last_three = Stride::new(Some(-3), None, 1);
let reversed = Stride::from(..).with_step(-1);
```
**/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stride {
	/// First selected position; `None` is the start (or end, when stepping
	/// backwards) of the sequence.
	pub start: Option<isize>,
	/// Exclusive bound; `None` is the end (or start) of the sequence.
	pub stop: Option<isize>,
	/// Distance between selected positions. Must not be zero.
	pub step: isize,
}

impl Stride {
	/// Builds a stride from raw parts.
	#[inline]
	pub const fn new(
		start: Option<isize>,
		stop: Option<isize>,
		step: isize,
	) -> Self {
		Self { start, stop, step }
	}

	/// The stride selecting every position, in order.
	#[inline]
	pub const fn full() -> Self {
		Self::new(None, None, 1)
	}

	/// Replaces the step, keeping both endpoints.
	#[inline]
	pub const fn with_step(self, step: isize) -> Self {
		Self { step, ..self }
	}

	/// Resolves the stride against a sequence length.
	///
	/// Endpoints wrap (negative indices count from the end) and clamp (out of
	/// range indices saturate at the sequence boundary), following the
	/// standard extended-slice rules. The resolved selection may be empty.
	///
	/// # Errors
	///
	/// [`Error::ZeroStep`] when `step` is zero.
	pub(crate) fn indices(&self, len: usize) -> Result<Indices> {
		if self.step == 0 {
			return Err(Error::ZeroStep);
		}
		let step = self.step;
		let len = len as isize;
		//  The clamp window depends on travel direction: walking backwards,
		//  the exclusive stop may rest one before the first element.
		let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };
		let resolve = |given: Option<isize>, default: isize| match given {
			None => default,
			Some(pos) if pos < 0 => (pos + len).max(lower),
			Some(pos) => pos.min(upper),
		};
		let (start, stop) = if step > 0 {
			(resolve(self.start, lower), resolve(self.stop, upper))
		}
		else {
			(resolve(self.start, upper), resolve(self.stop, lower))
		};
		let count = if step > 0 {
			if start >= stop { 0 } else { (stop - start - 1) / step + 1 }
		}
		else if start <= stop {
			0
		}
		else {
			(start - stop - 1) / -step + 1
		};
		Ok(Indices {
			start,
			stop,
			step,
			count: count as usize,
		})
	}
}

impl Default for Stride {
	#[inline]
	fn default() -> Self {
		Self::full()
	}
}

impl From<Range<isize>> for Stride {
	#[inline]
	fn from(range: Range<isize>) -> Self {
		Self::new(Some(range.start), Some(range.end), 1)
	}
}

impl From<RangeInclusive<isize>> for Stride {
	#[inline]
	fn from(range: RangeInclusive<isize>) -> Self {
		Self::new(Some(*range.start()), Some(*range.end() + 1), 1)
	}
}

impl From<RangeFrom<isize>> for Stride {
	#[inline]
	fn from(range: RangeFrom<isize>) -> Self {
		Self::new(Some(range.start), None, 1)
	}
}

impl From<RangeTo<isize>> for Stride {
	#[inline]
	fn from(range: RangeTo<isize>) -> Self {
		Self::new(None, Some(range.end), 1)
	}
}

impl From<RangeToInclusive<isize>> for Stride {
	#[inline]
	fn from(range: RangeToInclusive<isize>) -> Self {
		Self::new(None, Some(range.end + 1), 1)
	}
}

impl From<RangeFull> for Stride {
	#[inline]
	fn from(_: RangeFull) -> Self {
		Self::full()
	}
}

/** A stride resolved against a concrete sequence length.

Selected positions are `start + k * step` for `k` in `0 .. count`; every
such position is a valid index into the sequence the stride was resolved
against. `stop` is retained only as the exclusive travel bound.
**/
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Indices {
	pub(crate) start: isize,
	pub(crate) stop: isize,
	pub(crate) step: isize,
	pub(crate) count: usize,
}

impl Indices {
	/// The `k`-th selected position, `k < count`.
	#[inline]
	pub(crate) fn position(&self, k: usize) -> usize {
		debug_assert!(k < self.count, "Selection index {} out of range", k);
		(self.start + k as isize * self.step) as usize
	}

	/// Re-expresses a descending selection as the ascending selection of the
	/// same position set. Used where visit order does not matter (counting,
	/// filling, deletion).
	pub(crate) fn into_ascending(self) -> Self {
		if self.step > 0 {
			return self;
		}
		if self.count == 0 {
			return Self {
				start: 0,
				stop: 0,
				step: -self.step,
				count: 0,
			};
		}
		let first = self.start + (self.count as isize - 1) * self.step;
		Self {
			start: first,
			stop: self.start + 1,
			step: -self.step,
			count: self.count,
		}
	}
}
