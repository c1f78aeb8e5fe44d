// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_type::{Date, DateTime};

use crate::{
	container::{ArrayContainer, BoolContainer, NumberContainer, TemporalContainer, UndefinedContainer, Utf8Container},
	data::ColumnData,
};

macro_rules! number_factory {
	($($name:ident: $ty:ty => $variant:ident),+ $(,)?) => {
		$(
			pub fn $name(values: impl IntoIterator<Item = $ty>) -> ColumnData {
				ColumnData::$variant(NumberContainer::new(values.into_iter().collect()))
			}
		)+
	};
}

impl ColumnData {
	number_factory!(
		float4: f32 => Float4,
		float8: f64 => Float8,
		int1: i8 => Int1,
		int2: i16 => Int2,
		int4: i32 => Int4,
		int8: i64 => Int8,
		uint1: u8 => Uint1,
		uint2: u16 => Uint2,
		uint4: u32 => Uint4,
		uint8: u64 => Uint8,
	);

	pub fn bool(values: impl IntoIterator<Item = bool>) -> ColumnData {
		ColumnData::Bool(BoolContainer::new(values.into_iter().collect()))
	}

	pub fn utf8<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnData {
		ColumnData::Utf8(Utf8Container::new(values.into_iter().map(str::to_string).collect()))
	}

	pub fn utf8_owned(values: impl IntoIterator<Item = String>) -> ColumnData {
		ColumnData::Utf8(Utf8Container::new(values.into_iter().collect()))
	}

	pub fn date(values: impl IntoIterator<Item = Date>) -> ColumnData {
		ColumnData::Date(TemporalContainer::new(values.into_iter().collect()))
	}

	pub fn datetime(values: impl IntoIterator<Item = DateTime>) -> ColumnData {
		ColumnData::DateTime(TemporalContainer::new(values.into_iter().collect()))
	}

	pub fn array(container: ArrayContainer) -> ColumnData {
		ColumnData::Array(container)
	}

	pub fn undefined(len: usize) -> ColumnData {
		ColumnData::Undefined(UndefinedContainer::new(len))
	}
}
