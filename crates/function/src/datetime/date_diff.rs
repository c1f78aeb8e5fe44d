// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

use tephra_column::{Column, ColumnData};
use tephra_type::{Date, DateTime, DateUnit, RelativeUnit, Timezone, Type, Value};

use crate::dispatch::{ResolvedArg, check_arity, resolve, unsupported_argument};
use crate::{FunctionError, FunctionOptions, Result, ScalarFunction, ScalarFunctionContext};

const NAME: &str = "date_diff";

/// `date_diff(unit, start, end[, timezone])`: the number of calendar
/// boundaries of `unit` crossed between `start` and `end`, as a signed
/// 64-bit count. `unit` (and the timezone, when present) must be
/// constant strings.
///
/// Without an explicit timezone both sides are read in UTC. The result
/// is the difference of per-argument relative unit counts, so mixing a
/// date with a datetime is fine.
pub struct DateDiff;

impl DateDiff {
	fn check_arity(&self, actual: usize) -> Result<()> {
		check_arity(NAME, "3 or 4", actual, |n| n == 3 || n == 4)
	}
}

impl ScalarFunction for DateDiff {
	fn name(&self) -> &'static str {
		NAME
	}

	fn signature(&self) -> &'static str {
		"date_diff(unit, start, end[, timezone]) -> int8"
	}

	fn options(&self) -> FunctionOptions {
		FunctionOptions {
			constant_arguments: &[0, 3],
			..FunctionOptions::default()
		}
	}

	fn return_type(&self, argument_types: &[Type]) -> Result<Type> {
		self.check_arity(argument_types.len())?;
		if argument_types[0] != Type::Utf8 {
			return Err(FunctionError::UnsupportedColumnType {
				function: NAME,
				argument: 0,
				actual: argument_types[0].clone(),
			});
		}
		for argument in 1..=2 {
			if !argument_types[argument].is_temporal() {
				return Err(FunctionError::UnsupportedColumnType {
					function: NAME,
					argument,
					actual: argument_types[argument].clone(),
				});
			}
		}
		if let Some(timezone) = argument_types.get(3) {
			if *timezone != Type::Utf8 {
				return Err(FunctionError::UnsupportedColumnType {
					function: NAME,
					argument: 3,
					actual: timezone.clone(),
				});
			}
		}
		Ok(Type::Int8)
	}

	fn execute(&self, ctx: ScalarFunctionContext) -> Result<Column> {
		let columns = ctx.columns;
		self.check_arity(columns.len())?;

		let unit_name = constant_utf8(&columns[0], 0)?;
		let unit = DateUnit::parse(&unit_name).ok_or_else(|| FunctionError::UnsupportedUnit {
			function: NAME,
			unit: unit_name.clone(),
		})?;

		let timezone = match columns.get(3) {
			Some(column) => Timezone::parse(&constant_utf8(column, 3)?)?,
			None => Timezone::utc(),
		};

		let start = TemporalArg::resolve(&columns[1], 1)?;
		let end = TemporalArg::resolve(&columns[2], 2)?;

		let out = match (start, end) {
			(TemporalArg::Date(x), TemporalArg::Date(y)) => diff_rows(x, y, unit, timezone, ctx.row_count),
			(TemporalArg::Date(x), TemporalArg::DateTime(y)) => diff_rows(x, y, unit, timezone, ctx.row_count),
			(TemporalArg::DateTime(x), TemporalArg::Date(y)) => diff_rows(x, y, unit, timezone, ctx.row_count),
			(TemporalArg::DateTime(x), TemporalArg::DateTime(y)) => diff_rows(x, y, unit, timezone, ctx.row_count),
		};
		Ok(Column::Vector(ColumnData::int8(out)))
	}
}

/// Temporal argument resolved to one of the supported scalar types, in
/// a fixed order.
enum TemporalArg<'a> {
	Date(ResolvedArg<'a, Date>),
	DateTime(ResolvedArg<'a, DateTime>),
}

impl<'a> TemporalArg<'a> {
	fn resolve(column: &'a Column, argument: usize) -> Result<Self> {
		if let Some(arg) = resolve::<Date>(column) {
			return Ok(TemporalArg::Date(arg));
		}
		if let Some(arg) = resolve::<DateTime>(column) {
			return Ok(TemporalArg::DateTime(arg));
		}
		Err(unsupported_argument(NAME, argument, column))
	}
}

fn diff_rows<X, Y>(start: ResolvedArg<X>, end: ResolvedArg<Y>, unit: DateUnit, timezone: Timezone, row_count: usize) -> Vec<i64>
where
	X: RelativeUnit,
	Y: RelativeUnit,
{
	(0..row_count)
		.map(|row| end.get(row).relative(unit, timezone) - start.get(row).relative(unit, timezone))
		.collect()
}

fn constant_utf8(column: &Column, argument: usize) -> Result<String> {
	match column {
		Column::Constant(constant) => match constant.value() {
			Value::Utf8(value) => Ok(value),
			_ => Err(unsupported_argument(NAME, argument, column)),
		},
		Column::Vector(ColumnData::Utf8(_)) => Err(FunctionError::NonConstantArgument {
			function: NAME,
			argument,
		}),
		_ => Err(unsupported_argument(NAME, argument, column)),
	}
}

#[cfg(test)]
mod tests {
	use tephra_column::{Columns, ConstantColumn};

	use super::*;

	fn constant_utf8_column(value: &str, rows: usize) -> Column {
		Column::Constant(ConstantColumn::new(ColumnData::utf8([value]), rows))
	}

	fn diff(unit: &str, start: Column, end: Column, rows: usize) -> Result<Vec<i64>> {
		let columns = Columns::new(vec![constant_utf8_column(unit, rows), start, end]);
		let result = DateDiff.execute(ScalarFunctionContext {
			columns: &columns,
			row_count: rows,
		})?;
		let Column::Vector(ColumnData::Int8(values)) = result else {
			panic!("expected int8 vector");
		};
		Ok(values.as_slice().to_vec())
	}

	#[test]
	fn test_days_between_dates() {
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap(), Date::from_ymd(2024, 3, 1).unwrap()]));
		let end = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 31).unwrap(), Date::from_ymd(2024, 2, 28).unwrap()]));
		assert_eq!(diff("day", start, end, 2).unwrap(), vec![30, -2]);
	}

	#[test]
	fn test_unit_aliases() {
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2023, 12, 31).unwrap()]));
		let end = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap()]));
		for unit in ["year", "yy", "yyyy"] {
			assert_eq!(diff(unit, start.clone(), end.clone(), 1).unwrap(), vec![1]);
		}
	}

	#[test]
	fn test_month_counts_boundaries_not_spans() {
		// One day apart but a month boundary in between.
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 31).unwrap()]));
		let end = Column::Vector(ColumnData::date([Date::from_ymd(2024, 2, 1).unwrap()]));
		assert_eq!(diff("month", start, end, 1).unwrap(), vec![1]);
	}

	#[test]
	fn test_mixed_date_and_datetime() {
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap()]));
		let end = Column::Vector(ColumnData::datetime([DateTime::from_ymd_hms(2024, 1, 2, 0, 0, 0).unwrap()]));
		assert_eq!(diff("day", start, end, 1).unwrap(), vec![1]);
	}

	#[test]
	fn test_constant_argument_broadcasts() {
		let start = Column::Constant(ConstantColumn::new(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap()]), 3));
		let end = Column::Vector(ColumnData::date([
			Date::from_ymd(2024, 1, 2).unwrap(),
			Date::from_ymd(2024, 1, 3).unwrap(),
			Date::from_ymd(2024, 1, 4).unwrap(),
		]));
		assert_eq!(diff("day", start, end, 3).unwrap(), vec![1, 2, 3]);
	}

	#[test]
	fn test_unknown_unit_is_rejected() {
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap()]));
		let end = start.clone();
		let err = diff("fortnight", start, end, 1).unwrap_err();
		assert_eq!(
			err,
			FunctionError::UnsupportedUnit {
				function: "date_diff",
				unit: "fortnight".to_string(),
			}
		);
	}

	#[test]
	fn test_non_constant_unit_is_rejected() {
		let unit = Column::Vector(ColumnData::utf8(["day"]));
		let start = Column::Vector(ColumnData::date([Date::from_ymd(2024, 1, 1).unwrap()]));
		let columns = Columns::new(vec![unit, start.clone(), start]);
		let err = DateDiff
			.execute(ScalarFunctionContext {
				columns: &columns,
				row_count: 1,
			})
			.unwrap_err();
		assert_eq!(
			err,
			FunctionError::NonConstantArgument {
				function: "date_diff",
				argument: 0,
			}
		);
	}

	#[test]
	fn test_timezone_shifts_day_boundary() {
		// 2024-01-01 23:30 UTC is already Jan 2 at +01:00.
		let start = Column::Vector(ColumnData::datetime([DateTime::from_ymd_hms(2024, 1, 1, 23, 30, 0).unwrap()]));
		let end = Column::Vector(ColumnData::datetime([DateTime::from_ymd_hms(2024, 1, 2, 0, 30, 0).unwrap()]));
		let columns = Columns::new(vec![
			constant_utf8_column("day", 1),
			start,
			end,
			constant_utf8_column("+01:00", 1),
		]);
		let result = DateDiff
			.execute(ScalarFunctionContext {
				columns: &columns,
				row_count: 1,
			})
			.unwrap();
		let Column::Vector(ColumnData::Int8(values)) = result else {
			panic!("expected int8 vector");
		};
		assert_eq!(values.as_slice(), &[0]);
	}

	#[test]
	fn test_return_type_checks_arity_and_types() {
		assert!(matches!(DateDiff.return_type(&[Type::Utf8, Type::Date]), Err(FunctionError::ArityMismatch { .. })));
		assert!(matches!(
			DateDiff.return_type(&[Type::Int4, Type::Date, Type::Date]),
			Err(FunctionError::UnsupportedColumnType { argument: 0, .. })
		));
		assert_eq!(DateDiff.return_type(&[Type::Utf8, Type::Date, Type::DateTime]).unwrap(), Type::Int8);
	}
}
