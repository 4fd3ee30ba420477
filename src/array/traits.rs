/*! General trait implementations for `BitArray`.

The operator traits are defined in the `ops` module, and the iteration
traits in `iter`.
!*/

use core::{
	cmp::Ordering,
	fmt::{
		self,
		Debug,
		Display,
		Formatter,
		Write as _,
	},
	hash::{
		Hash,
		Hasher,
	},
	str::FromStr,
};

use super::BitArray;
use crate::{
	error::Error,
	order::{
		default_order,
		BitOrder,
	},
};

impl Default for BitArray {
	/// An empty array with the process default ordering.
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

/** Renders the array as its `'0'`/`'1'` text, bit zero first.

```rust
use bitarray::prelude::*;

let ba = bitarray![0, 1, 0, 0, 1];
assert_eq!(format!("{}", ba), "01001");
```
**/
impl Display for BitArray {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		for bit in self {
			fmt.write_char(if bit { '1' } else { '0' })?;
		}
		Ok(())
	}
}

/** Renders the array for debugging as a constructor expression.

```rust
use bitarray::prelude::*;

assert_eq!(format!("{:?}", bitarray![0, 1, 1]), "bitarray('011')");
assert_eq!(format!("{:?}", bitarray![1]), "bitarray('1')");
assert_eq!(format!("{:?}", BitArray::new()), "bitarray()");
```
**/
impl Debug for BitArray {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		if self.is_empty() {
			return fmt.write_str("bitarray()");
		}
		fmt.write_str("bitarray('")?;
		Display::fmt(self, fmt)?;
		fmt.write_str("')")
	}
}

/// Parses `'0'`/`'1'` text into an array with the process default ordering.
impl FromStr for BitArray {
	type Err = Error;

	#[inline]
	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::parse(text, default_order())
	}
}

impl From<&[bool]> for BitArray {
	#[inline]
	fn from(src: &[bool]) -> Self {
		src.iter().copied().collect()
	}
}

impl From<Vec<bool>> for BitArray {
	#[inline]
	fn from(src: Vec<bool>) -> Self {
		src.into_iter().collect()
	}
}

impl<const N: usize> From<[bool; N]> for BitArray {
	#[inline]
	fn from(src: [bool; N]) -> Self {
		src.into_iter().collect()
	}
}

/** Tests if two arrays are semantically – not bytewise – equal.

It is valid to compare arrays of different orderings: equality requires the
same length and the same bit at each logical index, wherever each array
stores it.

```rust
use bitarray::{BitArray, BitOrder};

let l = BitArray::parse("0101", BitOrder::Lsb0).unwrap();
let r = BitArray::parse("0101", BitOrder::Msb0).unwrap();

assert_eq!(l, r);
assert_ne!(l.to_bytes(), r.to_bytes());
```
**/
impl PartialEq for BitArray {
	fn eq(&self, rhs: &Self) -> bool {
		if self.len() != rhs.len() {
			return false;
		}
		if self.order() == rhs.order() {
			//  Same layout: the full bytes compare raw, and the final byte
			//  compares with its padding silenced.
			let split = self.len() / 8;
			return self.raw()[.. split] == rhs.raw()[.. split]
				&& self.last_byte_zeroed() == rhs.last_byte_zeroed();
		}
		self.iter().eq(rhs.iter())
	}
}

impl Eq for BitArray {
}

impl PartialOrd for BitArray {
	#[inline]
	fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
		Some(self.cmp(rhs))
	}
}

/** Compares two arrays lexicographically by logical bit, with a cleared bit
sorting below a set bit and a strict prefix sorting below its extension.
**/
impl Ord for BitArray {
	#[inline]
	fn cmp(&self, rhs: &Self) -> Ordering {
		self.iter().cmp(rhs.iter())
	}
}

/// Hashes the logical sequence, so that equal arrays of different orderings
/// hash identically: bytes are normalized to `Lsb0` form and padding is
/// silenced on the way in.
impl Hash for BitArray {
	fn hash<H>(&self, hasher: &mut H)
	where H: Hasher {
		self.len().hash(hasher);
		let normal = |byte: u8| match self.order() {
			BitOrder::Lsb0 => byte,
			BitOrder::Msb0 => byte.reverse_bits(),
		};
		if let Some((_, body)) = self.raw().split_last() {
			for &byte in body {
				normal(byte).hash(hasher);
			}
			normal(self.last_byte_zeroed()).hash(hasher);
		}
	}
}
