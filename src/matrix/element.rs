// ============================================================================
// Ring Element
// Capability bound for matrix/vector entries
// ============================================================================

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Neg, Sub};

/// Algebraic-value capability required of matrix and vector entries:
/// a ring with identities, equality and a display form.
///
/// Blanket-implemented, so any value type carrying the standard operator
/// impls plus `num_traits::{Zero, One}` qualifies: `BigInt`, `BigDecimal`,
/// [`ComplexInt`](crate::complex::ComplexInt) and
/// [`ComplexDecimal`](crate::complex::ComplexDecimal) all do.
///
/// Division is deliberately absent: the engine stops at `adjugate`
/// generically and offers `inverse` only where a division exists.
pub trait Ring:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
{
}

impl<T> Ring for T where
    T: Clone
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + Zero
        + One
        + Neg<Output = Self>
        + Sub<Output = Self>
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use num_bigint::BigInt;

    fn assert_ring<E: Ring>() {}

    #[test]
    fn test_backing_number_types_qualify() {
        assert_ring::<BigInt>();
        assert_ring::<BigDecimal>();
    }
}
