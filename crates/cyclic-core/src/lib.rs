//! Cyclic Prime Core
//!
//! Cyclic numbers, their sub-numbers, and the index schemes used to cite
//! them in OEIS sequences.
//!
//! # Cyclic Numbers
//!
//! The base-N expansion of numerator/P repeats with period k, the
//! multiplicative order of N modulo P. The repeating block, written with its
//! leading zeros, is the cyclic number: `142857` for 1/7 in base 10.
//!
//! # Sub-Numbers
//!
//! Reading the block as an endless cycle, every window of a given length at
//! every offset is a sub-number. Windows are enumerated length-major,
//! offset-minor, so the enumeration is exactly reproducible and positions
//! can be published.
//!
//! # Indexing
//!
//! Two schemes, kept apart on purpose:
//! - enumeration positions ([`SubNumberIndex`]), and
//! - leading-digit indices ([`get_idx`], [`repair_by_idx_special`]), built
//!   from a window's digit count and the rank of its first digit.
//!
//! # Example
//!
//! ```
//! use cyclic_core::{list_sub_numbers, Base, CyclicNumber};
//!
//! let seventh = CyclicNumber::unit(7, Base::DECIMAL).unwrap();
//! assert_eq!(seventh.digits().as_str(), "142857");
//!
//! let subs = list_sub_numbers(seventh.digits(), 1, 2).unwrap();
//! assert_eq!(subs.len(), 12);
//! ```

mod cyclic;
mod digits;
mod error;
mod index;
mod subnumbers;

pub use cyclic::{multiplicative_order, CyclicNumber, ReptendLevel};
pub use digits::{
    digit_count, leading_digit, parse_digits, to_digits, to_padded_digits, Base, DigitString,
    MAX_BASE, MIN_BASE,
};
pub use error::{Error, Result};
pub use index::{get_idx, repair_by_first_and_size, repair_by_idx_special, sorted_single_digits};
pub use subnumbers::{
    enumeration_len, list_sub_numbers, sub_number_at, SubNumber, SubNumberIndex, SubNumbers,
    MAX_WINDOW_DIGITS,
};

/// Numerator the exploration driver uses when deriving a cyclic number.
pub const DEFAULT_NUMERATOR: u64 = 2;
