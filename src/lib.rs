// ============================================================================
// Numeric Kernel Library
// Arbitrary-precision square roots, complex arithmetic and dense matrices
// ============================================================================

//! # Numeric Kernel
//!
//! An arbitrary-precision numeric kernel built on exact integer and decimal
//! arithmetic.
//!
//! ## Features
//!
//! - **Heron square-root solver** with a configurable abort criterion,
//!   iteration budget and math context, plus exact perfect-square roots
//! - **Complex numbers** over exact `BigInt` and arbitrary-scale
//!   `BigDecimal` coordinates, with quadrant-correct argument and polar form
//! - **Dense matrix/vector engine**, one-based and builder-validated, with
//!   structural predicates, Laplace determinants, trace and inverse
//! - **Arbitrary-precision trigonometry** (π, atan, sin, cos) backing the
//!   polar conversions
//!
//! ## Example
//!
//! ```rust
//! use bigdecimal::BigDecimal;
//! use num_bigint::BigInt;
//! use numeric_kernel::prelude::*;
//!
//! // √2 with the default context (128 significant digits)
//! let root = sqrt(&BigDecimal::from(2), &SquareRootContext::default()).unwrap();
//! assert!(root > "1.4142135".parse::<BigDecimal>().unwrap());
//! assert!(root < "1.4142136".parse::<BigDecimal>().unwrap());
//!
//! // 3 + 4i has squared modulus 25
//! let z = ComplexInt::new(BigInt::from(3), BigInt::from(4));
//! assert_eq!(z.abs_pow2(), BigInt::from(25));
//!
//! // a validated 2x2 identity matrix
//! let mut builder = MatrixBuilder::new(2, 2).unwrap();
//! builder.put(1, 1, BigInt::from(1)).unwrap();
//! builder.put(2, 2, BigInt::from(1)).unwrap();
//! builder.put_all(BigInt::from(0));
//! let identity = builder.build().unwrap();
//! assert!(identity.is_identity());
//! assert_eq!(identity.det().unwrap(), BigInt::from(1));
//! ```

pub mod complex;
pub mod matrix;
pub mod numeric;
pub mod solver;
pub mod trig;

// Re-exports for convenience
pub mod prelude {
    pub use crate::complex::{ComplexDecimal, ComplexInt, PolarForm};
    pub use crate::matrix::{Matrix, MatrixBuilder, Ring, Vector, VectorBuilder};
    pub use crate::numeric::{ErrorKind, KernelError, KernelResult, MathContext};
    pub use crate::solver::{
        sqrt, sqrt_of_perfect_square, sqrt_with_sink, IterationTrace, LoggingTraceSink,
        NoOpTraceSink, SquareRootContext, TraceSink,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use bigdecimal::BigDecimal;
    use num_bigint::BigInt;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_sqrt_of_two_default_context() {
        let root = sqrt(&BigDecimal::from(2), &SquareRootContext::default()).unwrap();
        assert!(root > dec("1.4142135"));
        assert!(root < dec("1.4142136"));
    }

    #[test]
    fn test_three_four_five_modulus() {
        let z = ComplexInt::new(BigInt::from(3), BigInt::from(4));
        assert_eq!(z.abs_pow2(), BigInt::from(25));

        let modulus = z.abs(&SquareRootContext::default()).unwrap();
        assert!(modulus > dec("4.999"));
        assert!(modulus < dec("5.001"));
    }

    #[test]
    fn test_identity_matrix_structure() {
        let mut builder = MatrixBuilder::new(2, 2).unwrap();
        builder.put(1, 1, BigInt::from(1)).unwrap();
        builder.put(2, 2, BigInt::from(1)).unwrap();
        builder.put_all(BigInt::from(0));
        let identity = builder.build().unwrap();

        assert!(identity.is_diagonal());
        assert!(identity.is_symmetric());
        assert!(!identity.is_skew_symmetric());
        assert_eq!(identity.det().unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_unit_diagonal_polar_form() {
        let ctx = SquareRootContext::default();
        let z = ComplexDecimal::new(BigDecimal::from(1), BigDecimal::from(1));
        let polar = z.polar_form(&ctx).unwrap();

        // radial √2, angular π/4
        assert!((polar.radial() - dec("1.41421356237309504880")).abs() < dec("1e-9"));
        assert!((polar.angular() - dec("0.78539816339744830961")).abs() < dec("1e-19"));
    }

    #[test]
    fn test_non_square_matrix_has_no_determinant() {
        let rows = vec![
            vec![BigInt::from(1), BigInt::from(2), BigInt::from(3)],
            vec![BigInt::from(4), BigInt::from(5), BigInt::from(6)],
        ];
        let matrix = Matrix::from_rows(rows).unwrap();

        assert!(!matrix.is_square());
        let err = matrix.det().unwrap_err();
        assert_eq!(err, KernelError::NotSquare { rows: 2, columns: 3 });
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_solver_to_matrix_pipeline() {
        // invert a decimal matrix, then check A·A⁻¹ against the identity
        let mc = MathContext::DEFAULT;
        let rows = vec![
            vec![dec("4"), dec("7")],
            vec![dec("2"), dec("6")],
        ];
        let matrix = Matrix::from_rows(rows).unwrap();
        let inverse = matrix.inverse(&mc).unwrap();
        let product = matrix.mul(&inverse).unwrap();

        let tolerance = dec("1e-90");
        assert!((product.get(1, 1).unwrap() - BigDecimal::from(1)).abs() < tolerance);
        assert!((product.get(1, 2).unwrap() - BigDecimal::from(0)).abs() < tolerance);
        assert!((product.get(2, 1).unwrap() - BigDecimal::from(0)).abs() < tolerance);
        assert!((product.get(2, 2).unwrap() - BigDecimal::from(1)).abs() < tolerance);
    }

    #[test]
    fn test_polar_round_trip() {
        let ctx = SquareRootContext::default();
        let z = ComplexDecimal::new(dec("3"), dec("-4"));
        let back = z.polar_form(&ctx).unwrap().complex_number(ctx.math()).unwrap();

        let tolerance = dec("1e-8");
        assert!((back.re() - z.re()).abs() < tolerance);
        assert!((back.im() - z.im()).abs() < tolerance);
    }
}
