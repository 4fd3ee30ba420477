/*! `bitarray` – a mutable, byte-packed sequence of bits.

This crate provides a single container, [`BitArray`]: an ordered, growable
sequence of single-bit values stored eight to the byte. Unlike a `Vec<bool>`,
every bit of the data segment is used; unlike a fixed bit-field, the sequence
supports insertion, deletion, splicing, searching, counting, sorting, and
exchange with raw byte buffers.

Each array carries a [`BitOrder`] fixed at construction, deciding whether bit
zero of a byte is its least or most significant bit. The order governs only
the placement of bits *within* each byte – never the order of bytes – and two
arrays of different orders holding the same logical bits compare equal.
Constructors that do not take an explicit order snapshot a process-wide
default, which starts out as [`BitOrder::Msb0`] (`"big"`).

```rust
use bitarray::prelude::*;

let mut ba = bitarray![0, 1, 1, 0];
ba.push(true);
ba.extend_from_str("00_11").unwrap();

assert_eq!(ba.to_string(), "011010011");
assert_eq!(ba.count(true), 5);
assert_eq!(ba.find(&bitarray![1, 0, 0]), Some(4));
```

[`BitArray`]: crate::BitArray
[`BitOrder`]: crate::BitOrder
[`BitOrder::Msb0`]: crate::BitOrder::Msb0
!*/

#![cfg_attr(debug_assertions, warn(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![deny(unconditional_recursion)]

#[macro_use]
pub mod macros;

pub mod array;
pub mod error;
pub mod mem;
pub mod order;
pub mod prelude;
pub mod stride;

#[cfg(feature = "serde")]
mod serdes;

pub use crate::{
	array::{
		BitArray,
		BitPattern,
	},
	error::{
		Error,
		Result,
	},
	order::{
		default_order,
		set_default_order,
		BitOrder,
	},
	stride::Stride,
};
