/*! Cross-ordering semantics.

Arrays of different orderings must behave as the same logical sequence
everywhere: equality, ordering, hashing, appending, searching, and
splicing all work by logical bit index, while the raw byte images differ.
!*/

use std::collections::HashSet;

use bitarray::prelude::*;

fn both(text: &str) -> (BitArray, BitArray) {
	(
		BitArray::parse(text, BitOrder::Lsb0).unwrap(),
		BitArray::parse(text, BitOrder::Msb0).unwrap(),
	)
}

#[test]
fn equal_bits_different_bytes() {
	let (little, big) = both("1101 0010 1");
	assert_eq!(little, big);
	assert_ne!(little.to_bytes(), big.to_bytes());
	assert_eq!(little.to_bytes(), [0b0100_1011, 0b0000_0001]);
	assert_eq!(big.to_bytes(), [0b1101_0010, 0b1000_0000]);
}

#[test]
fn hashes_follow_equality() {
	let (little, big) = both("0110 1110 001");
	let mut set = HashSet::new();
	assert!(set.insert(little));
	assert!(!set.insert(big));
}

#[test]
fn comparison_is_logical() {
	let low = BitArray::parse("0100", BitOrder::Lsb0).unwrap();
	let high = BitArray::parse("0101", BitOrder::Msb0).unwrap();
	assert!(low < high);
	assert!(high > low);
}

#[test]
fn appending_is_blind_to_ordering() {
	let (little, big) = both("1011001");
	let mut onto_little = little.clone();
	onto_little.extend_from_bitarray(&big);
	let mut onto_big = big.clone();
	onto_big.extend_from_bitarray(&little);

	assert_eq!(onto_little, onto_big);
	assert_eq!(onto_little.to_string(), "10110011011001");
	//  The receiver keeps its own ordering.
	assert_eq!(onto_little.order(), BitOrder::Lsb0);
	assert_eq!(onto_big.order(), BitOrder::Msb0);
}

#[test]
fn aligned_bulk_append_reverses_bytes() {
	//  Sixteen bits land on the aligned fast path, which must byte-reverse
	//  when the orderings differ.
	let (little, big) = both("11110000 10100101");
	let mut onto = BitArray::with_order(BitOrder::Msb0);
	onto.extend_from_bitarray(&little);
	assert_eq!(onto, big);
	assert_eq!(onto.to_bytes(), big.to_bytes());
}

#[test]
fn searching_a_foreign_needle() {
	let hay = BitArray::parse("00010010", BitOrder::Msb0).unwrap();
	let needle = BitArray::parse("100", BitOrder::Lsb0).unwrap();
	assert_eq!(hay.find(&needle), Some(3));
	assert!(hay.contains(&needle));
}

#[test]
fn splicing_foreign_bits() {
	let mut hay = BitArray::parse("00000000", BitOrder::Msb0).unwrap();
	let patch = BitArray::parse("1111", BitOrder::Lsb0).unwrap();
	hay.splice(2 .. 6, &patch).unwrap();
	assert_eq!(hay.to_string(), "00111100");
	assert_eq!(hay.order(), BitOrder::Msb0);
}

#[test]
fn text_round_trip_crosses_orderings() {
	let source = BitArray::parse("100101110", BitOrder::Msb0).unwrap();
	let text = source.to_string();
	for order in [BitOrder::Lsb0, BitOrder::Msb0] {
		let back = BitArray::parse(&text, order).unwrap();
		assert_eq!(back, source);
	}
}
