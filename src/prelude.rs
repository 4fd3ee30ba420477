/*! `bitarray` symbol export.

This module collects the general public API of the crate into a single spot
for bulk import. Glob-import it to get the container, the ordering names,
the stride type, and the constructor macro all at once:

```rust
use bitarray::prelude::*;

let ba = bitarray![Lsb0; 1, 0, 1];
assert_eq!(ba.order(), BitOrder::Lsb0);
```
!*/

pub use crate::{
	array::{
		BitArray,
		BitPattern,
		IntoIter,
		Iter,
	},
	bitarray,
	error::Error,
	order::{
		default_order,
		set_default_order,
		BitOrder,
		BitOrder::{
			Lsb0,
			Msb0,
		},
	},
	stride::Stride,
};
