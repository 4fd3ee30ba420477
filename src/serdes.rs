/*! `serde`-powered de/serialization.

A `BitArray` serializes as a three-field record: the ordering's textual
form, the logical bit length, and the packed data bytes with their padding
silenced. Deserialization accepts the fields in any order when the format
is self-describing, validates the ordering string, and demands that the
byte count match the bit count exactly.
!*/

#![cfg(feature = "serde")]

use core::fmt::{
	self,
	Formatter,
};

use serde::{
	de::{
		self,
		Deserializer,
		MapAccess,
		SeqAccess,
		Unexpected,
		Visitor,
	},
	ser::{
		SerializeStruct,
		Serializer,
	},
	Deserialize,
	Serialize,
};
use wyz::pipe::Pipe;

use crate::{
	array::BitArray,
	mem,
	order::BitOrder,
};

impl Serialize for BitArray {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		let mut state = serializer.serialize_struct("BitArray", 3)?;

		state.serialize_field("order", self.order().as_str())?;
		state.serialize_field("bits", &(self.len() as u64))?;
		state.serialize_field("data", &self.to_bytes())?;

		state.end()
	}
}

#[derive(Clone, Copy, Debug)]
struct BitArrayVisitor;

impl BitArrayVisitor {
	/// Constructs a `BitArray` from deserialized components.
	///
	/// # Parameters
	///
	/// - `&self`: A visitor, only needed for access to an error message.
	/// - `order`: The deserialized ordering text.
	/// - `bits`: The deserialized length counter.
	/// - `data`: The deserialized storage bytes.
	///
	/// # Returns
	///
	/// The result of assembling the components into a `BitArray`. This can
	/// fail if the ordering text is not a known ordering, if the length
	/// counter does not fit the machine, or if the storage is not exactly
	/// the size the length counter demands.
	fn assemble<E>(
		&self,
		order: &str,
		bits: u64,
		data: Vec<u8>,
	) -> Result<BitArray, E>
	where E: de::Error {
		let order = order.parse::<BitOrder>().map_err(|_| {
			de::Error::invalid_value(
				Unexpected::Str(order),
				&"\"little\" or \"big\"",
			)
		})?;
		let bits = usize::try_from(bits).map_err(|_| {
			de::Error::invalid_value(
				Unexpected::Unsigned(bits),
				&"a bit count within the machine index space",
			)
		})?;
		if data.len() != mem::elts(bits) {
			return Err(de::Error::invalid_length(data.len(), self));
		}
		BitArray::from_raw_parts(order, bits, data).pipe(Ok)
	}
}

impl<'de> Visitor<'de> for BitArrayVisitor {
	type Value = BitArray;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("a BitArray record")
	}

	/// Visit a sequence of anonymous data elements. These must be in the
	/// order `str` (ordering text), `u64` (length counter), `[u8]` (data).
	fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
	where V: SeqAccess<'de> {
		let order = seq
			.next_element::<&str>()?
			.ok_or_else(|| de::Error::invalid_length(0, &self))?;
		let bits = seq
			.next_element::<u64>()?
			.ok_or_else(|| de::Error::invalid_length(1, &self))?;
		let data = seq
			.next_element::<Vec<u8>>()?
			.ok_or_else(|| de::Error::invalid_length(2, &self))?;

		self.assemble(order, bits, data)
	}

	/// Visit a map of named data elements. These may be in any order, and
	/// must be the pairs `order: str`, `bits: u64`, and `data: [u8]`.
	fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
	where V: MapAccess<'de> {
		let mut order: Option<&str> = None;
		let mut bits: Option<u64> = None;
		let mut data: Option<Vec<u8>> = None;

		while let Some(key) = map.next_key()? {
			match key {
				"order" => {
					if order.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("order"));
					}
				},
				"bits" => {
					if bits.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("bits"));
					}
				},
				"data" => {
					if data.replace(map.next_value()?).is_some() {
						return Err(de::Error::duplicate_field("data"));
					}
				},
				f => {
					return Err(de::Error::unknown_field(f, &[
						"order", "bits", "data",
					]));
				},
			}
		}
		let order =
			order.ok_or_else(|| de::Error::missing_field("order"))?;
		let bits = bits.ok_or_else(|| de::Error::missing_field("bits"))?;
		let data = data.ok_or_else(|| de::Error::missing_field("data"))?;

		self.assemble(order, bits, data)
	}
}

impl<'de> Deserialize<'de> for BitArray {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_struct(
			"BitArray",
			&["order", "bits", "data"],
			BitArrayVisitor,
		)
	}
}
