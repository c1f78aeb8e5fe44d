// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Tephra

pub mod error;
pub mod promote;
pub mod util;
pub mod value;

pub use error::TypeError;
pub use promote::least_supertype;
pub use util::bitvec::BitVec;
pub use value::{
	Value,
	convert::SafeConvert,
	date::Date,
	datetime::DateTime,
	is::{IsNumber, IsTemporal},
	timezone::Timezone,
	r#type::Type,
	unit::{DateUnit, RelativeUnit},
};
