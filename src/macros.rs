/*! Utility macros for constructing `BitArray`s.

The public macro is `bitarray!`.
!*/

/** Construct a [`BitArray`] out of a literal in source code, like `vec!`.

`bitarray!` accepts a sequence of integer bit expressions, each of which is
considered to represent `1` if it is any value other than exactly zero, or
a `vec!`-style repetition `[bit; count]`. Either form may be prefixed with
the bare name of a [`BitOrder`] variant and a semicolon to select the
ordering; without it, the process default ordering is used.

Because the ordering prefix is matched as a bare identifier, the repetition
form cannot take its *bit* from a plain variable; wrap it in parentheses if
you need that.

# Examples

```rust
use bitarray::prelude::*;

bitarray![Msb0; 0, 1];
bitarray![Lsb0; 0, 1,];
bitarray![0, 1];
bitarray![1; 5];
bitarray![Lsb0; 1; 5];
assert!(bitarray![].is_empty());
```

[`BitArray`]: crate::BitArray
[`BitOrder`]: crate::BitOrder
**/
#[macro_export]
macro_rules! bitarray {
	//  Empty.
	() => {
		$crate::BitArray::new()
	};

	//  Repetition syntax `[bit ; count]`, explicit order.
	($order:ident; $val:expr; $len:expr) => {{
		let mut ba =
			$crate::BitArray::zeros_with($len, $crate::BitOrder::$order);
		if $val != 0 {
			ba.set_all(true);
		}
		ba
	}};

	//  Sequence syntax, explicit order.
	($order:ident; $($val:expr),* $(,)?) => {{
		let mut ba = $crate::BitArray::with_order($crate::BitOrder::$order);
		$( ba.push($val != 0); )*
		ba
	}};

	//  Repetition syntax, default order.
	($val:expr; $len:expr) => {{
		let mut ba = $crate::BitArray::zeros($len);
		if $val != 0 {
			ba.set_all(true);
		}
		ba
	}};

	//  Sequence syntax, default order.
	($($val:expr),+ $(,)?) => {{
		let mut ba = $crate::BitArray::new();
		$( ba.push($val != 0); )+
		ba
	}};
}
