//! Leveled assertions. Checks at the simple level are always active; the heavier levels are only
//! compiled into test builds and builds with the `debug-checks` feature.
#[cfg(all(not(test), not(feature = "debug-checks")))]
pub const POLYSAT_ASSERT_LEVEL_DEFINITION: u8 = POLYSAT_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub const POLYSAT_ASSERT_LEVEL_DEFINITION: u8 = POLYSAT_ASSERT_EXTREME;

pub const POLYSAT_ASSERT_SIMPLE: u8 = 1;
pub const POLYSAT_ASSERT_MODERATE: u8 = 2;
pub const POLYSAT_ASSERT_ADVANCED: u8 = 3;
pub const POLYSAT_ASSERT_EXTREME: u8 = 4;

#[macro_export]
#[doc(hidden)]
macro_rules! print_polysat_assert_warning_message {
    () => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_MODERATE {
            log::warn!("Potential performance degradation: the polysat assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.", $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION);
        };
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! polysat_assert_extreme {
    ($($arg:tt)*) => {
        if $crate::asserts::POLYSAT_ASSERT_LEVEL_DEFINITION >= $crate::asserts::POLYSAT_ASSERT_EXTREME {
            assert!($($arg)*);
        }
    };
}
