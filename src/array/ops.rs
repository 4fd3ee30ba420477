/*! Operator implementations for `BitArray`.

Concatenation rides on `+` the way `String` concatenation does, repetition
on `*`, and whole-array inversion on `!`. The general trait implementations
are in the `traits` module.
!*/

use core::ops::{
	Add,
	AddAssign,
	Index,
	Mul,
	MulAssign,
	Not,
};

use super::BitArray;

/*  Bits are yielded by value everywhere else, but `Index` must produce a
reference, so the two possible referents are baked into the binary.
*/
static FALSE: bool = false;
static TRUE: bool = true;

impl Index<usize> for BitArray {
	type Output = bool;

	/// Looks up a single bit.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds. Use [`get`] for a checked read.
	///
	/// [`get`]: BitArray::get
	fn index(&self, index: usize) -> &Self::Output {
		match self.get(index) {
			Some(true) => &TRUE,
			Some(false) => &FALSE,
			None => panic!(
				"Index {} out of bounds: {}",
				index,
				self.len(),
			),
		}
	}
}

/// Concatenates `rhs` onto the end of `self`.
impl Add<&BitArray> for BitArray {
	type Output = Self;

	#[inline]
	fn add(mut self, rhs: &BitArray) -> Self::Output {
		self += rhs;
		self
	}
}

/// Appends `rhs` in place. The right-hand array's ordering does not matter;
/// bits are appended by logical index.
impl AddAssign<&BitArray> for BitArray {
	#[inline]
	fn add_assign(&mut self, rhs: &BitArray) {
		self.extend_from_bitarray(rhs);
	}
}

/** Repeats the array `count` times: zero empties it, one leaves it alone.

# Panics

Panics when `len() * count` overflows the index space, as `Vec` panics on
capacity overflow.
**/
impl Mul<usize> for BitArray {
	type Output = Self;

	#[inline]
	fn mul(mut self, count: usize) -> Self::Output {
		self *= count;
		self
	}
}

/// Repeats a borrowed array into a fresh allocation.
impl Mul<usize> for &BitArray {
	type Output = BitArray;

	#[inline]
	fn mul(self, count: usize) -> Self::Output {
		self.clone() * count
	}
}

impl MulAssign<usize> for BitArray {
	#[inline]
	fn mul_assign(&mut self, count: usize) {
		if let Err(err) = self.repeat(count) {
			panic!("{}", err);
		}
	}
}

/// Flips every bit of the array.
///
/// ```rust
/// # use bitarray::prelude::*;
/// let ba = bitarray![0, 1, 0, 0];
/// assert_eq!((!ba).to_string(), "1011");
/// ```
impl Not for BitArray {
	type Output = Self;

	#[inline]
	fn not(mut self) -> Self::Output {
		self.invert();
		self
	}
}
