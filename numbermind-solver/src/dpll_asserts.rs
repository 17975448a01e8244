//! Leveled assertions. Contracts that callers must uphold (e.g. a guess having the declared
//! number of digits) are checked with [`dpll_assert_simple`]; more expensive internal
//! consistency checks are only enabled at higher levels.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const DPLL_ASSERT_LEVEL_DEFINITION: u8 = DPLL_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const DPLL_ASSERT_LEVEL_DEFINITION: u8 = DPLL_ASSERT_MODERATE;

pub const DPLL_ASSERT_SIMPLE: u8 = 1;
pub const DPLL_ASSERT_MODERATE: u8 = 2;

#[macro_export]
#[doc(hidden)]
macro_rules! dpll_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! dpll_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! dpll_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::DPLL_ASSERT_LEVEL_DEFINITION >= $crate::asserts::DPLL_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}
