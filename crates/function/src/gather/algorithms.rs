// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use crate::{FunctionError, Result};

use super::{ArraySink, ArraySource};

/// Concatenates the current rows of all sources, row by row, into
/// `sink`. All sources must agree on the row count.
pub fn concat(sources: &mut [ArraySource], sink: &mut ArraySink) -> Result<()> {
	let row_count = match sources.first() {
		Some(source) => source.row_count(),
		None => return Ok(()),
	};
	if sources.iter().any(|source| source.row_count() != row_count) {
		return Err(FunctionError::Logical {
			message: "concat sources disagree on row count".to_string(),
		});
	}

	for _ in 0..row_count {
		for source in sources.iter_mut() {
			let (start, end) = source.row_range();
			sink.append_slice(source.data(), start, end)?;
			source.advance();
		}
		sink.close_row();
	}
	Ok(())
}

/// Copies every row of `source` minus its first `offset` elements.
/// Rows shorter than `offset` come out empty.
pub fn slice_from_left_constant_offset_unbounded(source: &mut ArraySource, sink: &mut ArraySink, offset: usize) -> Result<()> {
	slice_rows(source, sink, |start, end| {
		((start + offset).min(end), end)
	})
}

/// Copies up to `length` elements of every row of `source`, starting
/// `offset` elements in. A negative `length` counts back from the end
/// of the row. Both bounds clamp to the row, and a row whose effective
/// range is empty contributes zero elements.
pub fn slice_from_left_constant_offset_bounded(source: &mut ArraySource, sink: &mut ArraySink, offset: usize, length: i64) -> Result<()> {
	slice_rows(source, sink, |start, end| {
		let row_size = (end - start) as i64;
		let slice_start = (offset as i64).min(row_size);
		let slice_end = if length >= 0 {
			(offset as i64 + length).min(row_size)
		} else {
			(offset as i64 + row_size + length).min(row_size)
		};
		if slice_end <= slice_start {
			(start, start)
		} else {
			(start + slice_start as usize, start + slice_end as usize)
		}
	})
}

fn slice_rows(source: &mut ArraySource, sink: &mut ArraySink, bounds: impl Fn(usize, usize) -> (usize, usize)) -> Result<()> {
	for _ in 0..source.row_count() {
		let (start, end) = source.row_range();
		let (slice_start, slice_end) = bounds(start, end);
		if slice_end > slice_start {
			sink.append_slice(source.data(), slice_start, slice_end)?;
		}
		source.advance();
		sink.close_row();
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use tephra_column::{Column, ColumnData};
	use tephra_column::container::ArrayContainer;
	use tephra_type::Type;

	use super::*;

	fn column(offsets: Vec<usize>, data: ColumnData) -> Column {
		Column::Vector(ColumnData::array(ArrayContainer::new(offsets, data)))
	}

	#[test]
	fn test_concat_interleaves_rows() {
		let left = column(vec![2, 3], ColumnData::int4([1, 2, 3]));
		let right = column(vec![1, 3], ColumnData::int4([4, 5, 6]));
		let mut sources = vec![
			ArraySource::from_column(&left, "f", 0).unwrap(),
			ArraySource::from_column(&right, "f", 1).unwrap(),
		];
		let mut sink = ArraySink::new(&Type::Int4, 2);
		concat(&mut sources, &mut sink).unwrap();
		let array = sink.finish();
		assert_eq!(array.offsets(), &[3, 6]);
		assert_eq!(array.row_values(0), vec![1.into(), 2.into(), 4.into()]);
		assert_eq!(array.row_values(1), vec![3.into(), 5.into(), 6.into()]);
	}

	#[test]
	fn test_unbounded_slice_drops_first_element() {
		let input = column(vec![3, 3, 4], ColumnData::int4([1, 2, 3, 4]));
		let mut source = ArraySource::from_column(&input, "f", 0).unwrap();
		let mut sink = ArraySink::new(&Type::Int4, 3);
		slice_from_left_constant_offset_unbounded(&mut source, &mut sink, 1).unwrap();
		let array = sink.finish();
		assert_eq!(array.row_values(0), vec![2.into(), 3.into()]);
		assert!(array.row_values(1).is_empty());
		assert!(array.row_values(2).is_empty());
	}

	#[test]
	fn test_bounded_slice_drops_last_element() {
		let input = column(vec![3, 3, 4], ColumnData::int4([1, 2, 3, 4]));
		let mut source = ArraySource::from_column(&input, "f", 0).unwrap();
		let mut sink = ArraySink::new(&Type::Int4, 3);
		slice_from_left_constant_offset_bounded(&mut source, &mut sink, 0, -1).unwrap();
		let array = sink.finish();
		assert_eq!(array.row_values(0), vec![1.into(), 2.into()]);
		assert!(array.row_values(1).is_empty());
		assert!(array.row_values(2).is_empty());
	}

	#[test]
	fn test_bounded_slice_clamps_length() {
		let input = column(vec![2], ColumnData::int4([1, 2]));
		let mut source = ArraySource::from_column(&input, "f", 0).unwrap();
		let mut sink = ArraySink::new(&Type::Int4, 1);
		slice_from_left_constant_offset_bounded(&mut source, &mut sink, 1, 10).unwrap();
		let array = sink.finish();
		assert_eq!(array.row_values(0), vec![2.into()]);
	}

	#[test]
	fn test_bounded_slice_negative_length_past_start_is_empty() {
		let input = column(vec![2], ColumnData::int4([1, 2]));
		let mut source = ArraySource::from_column(&input, "f", 0).unwrap();
		let mut sink = ArraySink::new(&Type::Int4, 1);
		slice_from_left_constant_offset_bounded(&mut source, &mut sink, 0, -5).unwrap();
		let array = sink.finish();
		assert!(array.row_values(0).is_empty());
	}
}
