// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

//! Checked conversions between the primitive numeric element types.
//!
//! `checked_convert` returns `None` instead of wrapping or saturating when the
//! value does not fit the target type; the coercion layer turns that into a
//! cast error naming the value and both types.

pub trait SafeConvert<T>: Sized {
	fn checked_convert(self) -> Option<T>;
}

macro_rules! impl_safe_convert_identity {
	($($ty:ty),+ $(,)?) => {
		$(
			impl SafeConvert<$ty> for $ty {
				fn checked_convert(self) -> Option<$ty> {
					Some(self)
				}
			}
		)+
	};
}

impl_safe_convert_identity!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_safe_convert_int {
	($from:ty => $($to:ty),+ $(,)?) => {
		$(
			impl SafeConvert<$to> for $from {
				fn checked_convert(self) -> Option<$to> {
					<$to>::try_from(self).ok()
				}
			}
		)+
	};
}

impl_safe_convert_int!(i8 => i16, i32, i64, u8, u16, u32, u64);
impl_safe_convert_int!(i16 => i8, i32, i64, u8, u16, u32, u64);
impl_safe_convert_int!(i32 => i8, i16, i64, u8, u16, u32, u64);
impl_safe_convert_int!(i64 => i8, i16, i32, u8, u16, u32, u64);
impl_safe_convert_int!(u8 => i8, i16, i32, i64, u16, u32, u64);
impl_safe_convert_int!(u16 => i8, i16, i32, i64, u8, u32, u64);
impl_safe_convert_int!(u32 => i8, i16, i32, i64, u8, u16, u64);
impl_safe_convert_int!(u64 => i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_safe_convert_int_to_float {
	($($from:ty),+ => $to:ty) => {
		$(
			impl SafeConvert<$to> for $from {
				fn checked_convert(self) -> Option<$to> {
					Some(self as $to)
				}
			}
		)+
	};
}

impl_safe_convert_int_to_float!(i8, i16, i32, i64, u8, u16, u32, u64 => f32);
impl_safe_convert_int_to_float!(i8, i16, i32, i64, u8, u16, u32, u64 => f64);

macro_rules! impl_safe_convert_float_to_int {
	($from:ty => $($to:ty),+ $(,)?) => {
		$(
			impl SafeConvert<$to> for $from {
				fn checked_convert(self) -> Option<$to> {
					if !self.is_finite() {
						return None;
					}
					let truncated = self.trunc();
					if truncated < <$to>::MIN as $from || truncated > <$to>::MAX as $from {
						return None;
					}
					Some(truncated as $to)
				}
			}
		)+
	};
}

impl_safe_convert_float_to_int!(f32 => i8, i16, i32, i64, u8, u16, u32, u64);
impl_safe_convert_float_to_int!(f64 => i8, i16, i32, i64, u8, u16, u32, u64);

impl SafeConvert<f64> for f32 {
	fn checked_convert(self) -> Option<f64> {
		Some(self as f64)
	}
}

impl SafeConvert<f32> for f64 {
	fn checked_convert(self) -> Option<f32> {
		if self.is_finite() && (self > f32::MAX as f64 || self < f32::MIN as f64) {
			return None;
		}
		Some(self as f32)
	}
}

#[cfg(test)]
mod tests {
	use super::SafeConvert;

	#[test]
	fn test_widening_always_fits() {
		let x: i8 = -42;
		let y: Option<i64> = x.checked_convert();
		assert_eq!(y, Some(-42i64));
	}

	#[test]
	fn test_narrowing_out_of_range() {
		let x: i64 = 300;
		let y: Option<i8> = x.checked_convert();
		assert_eq!(y, None);
	}

	#[test]
	fn test_signed_to_unsigned_negative() {
		let x: i32 = -1;
		let y: Option<u32> = x.checked_convert();
		assert_eq!(y, None);
	}

	#[test]
	fn test_unsigned_to_signed_boundary() {
		let x: u64 = i64::MAX as u64;
		let y: Option<i64> = x.checked_convert();
		assert_eq!(y, Some(i64::MAX));

		let x: u64 = i64::MAX as u64 + 1;
		let y: Option<i64> = x.checked_convert();
		assert_eq!(y, None);
	}

	#[test]
	fn test_float_to_int_truncates() {
		let x: f64 = 3.9;
		let y: Option<i32> = x.checked_convert();
		assert_eq!(y, Some(3));
	}

	#[test]
	fn test_float_to_int_rejects_nan_and_overflow() {
		let x: f64 = f64::NAN;
		let y: Option<i32> = x.checked_convert();
		assert_eq!(y, None);

		let x: f64 = 1e300;
		let y: Option<i64> = x.checked_convert();
		assert_eq!(y, None);
	}

	#[test]
	fn test_f64_to_f32_overflow() {
		let x: f64 = 1e300;
		let y: Option<f32> = x.checked_convert();
		assert_eq!(y, None);

		let x: f64 = 1.5;
		let y: Option<f32> = x.checked_convert();
		assert_eq!(y, Some(1.5f32));
	}
}
