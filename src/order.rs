/*! Bit ordering.

A [`BitArray`] stores eight bits to the byte, and the order in which the
logical sequence traverses each byte is a property of the array, selected at
construction. [`BitOrder`] names the two traversals: [`Lsb0`] walks from the
least significant bit to the most, [`Msb0`] from the most significant to the
least.

The ordering affects only the placement of bits *within* a byte. Byte zero of
the buffer always holds bits `0 .. 8`, byte one holds bits `8 .. 16`, and so
on, whichever ordering is selected.

The textual forms of the orderings are `"little"` and `"big"`, following the
bit-endianness convention used by configuration and serialization surfaces.

A process-wide default ordering is kept in an atomic cell; constructors that
do not take an explicit ordering snapshot it through [`default_order`]. The
initial value is [`Msb0`].

[`BitArray`]: crate::BitArray
[`Lsb0`]: BitOrder::Lsb0
[`Msb0`]: BitOrder::Msb0
!*/

use core::{
	fmt::{
		self,
		Display,
		Formatter,
	},
	str::FromStr,
	sync::atomic::{
		AtomicBool,
		Ordering,
	},
};

use crate::error::Error;

/** An ordering of bits within a byte.

# Usage

The container stores and operates on semantic bit indices; `BitOrder`
translates the low three bits of such an index into a selector mask for the
byte holding it. [`select`] produces the one-hot mask for a single bit, and
[`head_mask`]/[`tail_mask`] produce the masks covering the first `k` (or all
but the first `k`) bit slots of a byte.

[`select`]: Self::select
[`head_mask`]: Self::head_mask
[`tail_mask`]: Self::tail_mask
**/
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum BitOrder {
	/// Traverses each byte from `LSbit` to `MSbit`; textual form `"little"`.
	Lsb0,
	/// Traverses each byte from `MSbit` to `LSbit`; textual form `"big"`.
	Msb0,
}

impl BitOrder {
	/// Translates a semantic in-byte index into a one-hot selector mask.
	///
	/// # Parameters
	///
	/// - `place`: A semantic bit index within a byte. Must be in `0 .. 8`.
	///
	/// # Returns
	///
	/// A mask with exactly the selected bit position set high.
	#[inline]
	pub(crate) fn select(self, place: u32) -> u8 {
		debug_assert!(place < 8, "Bit index {} must be below 8", place);
		match self {
			//  Set the LSbit, then shift it up.
			Self::Lsb0 => 1 << place,
			//  Set the MSbit, then shift it down.
			Self::Msb0 => 0x80 >> place,
		}
	}

	/// Produces the mask covering the first `k` semantic bit slots of a byte.
	///
	/// # Parameters
	///
	/// - `k`: The number of leading slots to select. Must be in `0 ..= 8`.
	///
	/// # Returns
	///
	/// A mask with the selected slot positions high and all others low.
	#[inline]
	pub(crate) fn head_mask(self, k: u32) -> u8 {
		debug_assert!(k <= 8, "Slot count {} must not exceed 8", k);
		match self {
			//  1. Set bit `k` (in a widened register, so `k == 8` is legal).
			//  2. Subtract one: slots below `k` are high, at LSedge.
			Self::Lsb0 => ((1u16 << k) - 1) as u8,
			//  Same mask, built at MSedge and shifted down into range.
			Self::Msb0 => (0xFF00u16 >> k) as u8,
		}
	}

	/// Produces the mask covering every semantic bit slot *except* the first
	/// `k`: the complement of [`head_mask`](Self::head_mask).
	#[inline]
	pub(crate) fn tail_mask(self, k: u32) -> u8 {
		!self.head_mask(k)
	}

	/// The textual form of the ordering: `"little"` or `"big"`.
	#[inline]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Lsb0 => "little",
			Self::Msb0 => "big",
		}
	}
}

impl Display for BitOrder {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str(self.as_str())
	}
}

/** Parses the textual ordering forms.

Exactly `"little"` and `"big"` are accepted; anything else produces
[`Error::BadOrder`].
**/
impl FromStr for BitOrder {
	type Err = Error;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		match text {
			"little" => Ok(Self::Lsb0),
			"big" => Ok(Self::Msb0),
			other => Err(Error::BadOrder(other.to_owned())),
		}
	}
}

/*  The process default is a single flag: orderings are a two-point set, and
`Msb0` maps to `false` so that the zero-initialized cell starts out big.
*/
static DEFAULT_LSB0: AtomicBool = AtomicBool::new(false);

/// Reads the process-wide default bit ordering.
///
/// Constructors that do not take an explicit ordering use this value. The
/// initial setting is [`BitOrder::Msb0`].
#[inline]
pub fn default_order() -> BitOrder {
	if DEFAULT_LSB0.load(Ordering::Relaxed) {
		BitOrder::Lsb0
	}
	else {
		BitOrder::Msb0
	}
}

/// Replaces the process-wide default bit ordering.
///
/// Only constructions performed after the call observe the new value;
/// existing arrays keep the ordering they were built with.
#[inline]
pub fn set_default_order(order: BitOrder) {
	DEFAULT_LSB0.store(order == BitOrder::Lsb0, Ordering::Relaxed);
}
