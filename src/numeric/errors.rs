// ============================================================================
// Kernel Errors
// Error taxonomy for all arbitrary-precision kernel operations
// ============================================================================

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use std::fmt;

/// Coarse classification of a [`KernelError`].
///
/// - `InvalidArgument`: a value is outside its declared domain.
/// - `InvalidState`: the operation is undefined for the receiver's current
///   value, independent of any argument.
///
/// Missing/null mandatory arguments (a third category in dynamically typed
/// ports of this kernel) cannot occur here: references and ownership make
/// them a compile-time guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
}

/// Errors produced by the kernel.
///
/// Every failure is a deterministic, pure function of the inputs and is
/// surfaced synchronously; there are no retries, partial results or internal
/// recovery. Messages embed the offending values.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Square root requested for a negative radicand
    NegativeRadicand(BigDecimal),
    /// Exact root requested for an integer that is not a perfect square
    NotAPerfectSquare(BigInt),
    /// Solver abort criterion outside the open interval (0, 1)
    AbortCriterionOutOfRange(BigDecimal),
    /// Solver iteration budget of zero
    ZeroIterationBudget,
    /// Math context with zero significant digits
    ZeroPrecision,
    /// Scalar division by zero
    DivisionByZero,
    /// Complex division by the zero number
    DivisorNotInvertible,
    /// Matrix builder declared with a zero dimension
    ZeroDimension { rows: usize, columns: usize },
    /// Vector builder declared with zero length
    ZeroLength,
    /// One-based matrix key outside the declared shape
    KeyOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// One-based vector index outside the declared length
    IndexOutOfRange { index: usize, size: usize },
    /// Matrix operands with incompatible shapes
    ShapeMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
    /// Vector operands (or a matrix-vector pair) with incompatible lengths
    LengthMismatch { left: usize, right: usize },
    /// Square-only operation applied to a non-square matrix
    NotSquare { rows: usize, columns: usize },
    /// Argument (angle) of the zero complex number
    ArgumentOfZero,
    /// Multiplicative inverse of a non-invertible value
    NotInvertible,
    /// `build()` called while declared cells remain unset
    IncompleteBuild { unset: usize },
}

impl KernelError {
    /// Classify this error as invalid-argument or invalid-state.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KernelError::NegativeRadicand(_)
            | KernelError::NotAPerfectSquare(_)
            | KernelError::AbortCriterionOutOfRange(_)
            | KernelError::ZeroIterationBudget
            | KernelError::ZeroPrecision
            | KernelError::DivisionByZero
            | KernelError::DivisorNotInvertible
            | KernelError::ZeroDimension { .. }
            | KernelError::ZeroLength
            | KernelError::KeyOutOfRange { .. }
            | KernelError::IndexOutOfRange { .. }
            | KernelError::ShapeMismatch { .. }
            | KernelError::LengthMismatch { .. } => ErrorKind::InvalidArgument,
            KernelError::NotSquare { .. }
            | KernelError::ArgumentOfZero
            | KernelError::NotInvertible
            | KernelError::IncompleteBuild { .. } => ErrorKind::InvalidState,
        }
    }
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::NegativeRadicand(value) => {
                write!(f, "square root of negative value {}", value)
            }
            KernelError::NotAPerfectSquare(value) => {
                write!(f, "{} is not a perfect square", value)
            }
            KernelError::AbortCriterionOutOfRange(value) => {
                write!(f, "abort criterion {} must lie in (0, 1)", value)
            }
            KernelError::ZeroIterationBudget => {
                write!(f, "iteration budget must be at least 1")
            }
            KernelError::ZeroPrecision => {
                write!(f, "precision must be at least 1 significant digit")
            }
            KernelError::DivisionByZero => write!(f, "division by zero"),
            KernelError::DivisorNotInvertible => write!(f, "divisor not invertible"),
            KernelError::ZeroDimension { rows, columns } => {
                write!(f, "matrix dimensions {}x{} must be positive", rows, columns)
            }
            KernelError::ZeroLength => write!(f, "vector length must be positive"),
            KernelError::KeyOutOfRange {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "key ({}, {}) outside declared shape {}x{}",
                row, column, rows, columns
            ),
            KernelError::IndexOutOfRange { index, size } => {
                write!(f, "index {} outside declared length {}", index, size)
            }
            KernelError::ShapeMismatch {
                left_rows,
                left_columns,
                right_rows,
                right_columns,
            } => write!(
                f,
                "incompatible matrix shapes {}x{} and {}x{}",
                left_rows, left_columns, right_rows, right_columns
            ),
            KernelError::LengthMismatch { left, right } => {
                write!(f, "incompatible lengths {} and {}", left, right)
            }
            KernelError::NotSquare { rows, columns } => {
                write!(
                    f,
                    "operation requires a square matrix, got {}x{}",
                    rows, columns
                )
            }
            KernelError::ArgumentOfZero => {
                write!(f, "argument of the zero complex number is undefined")
            }
            KernelError::NotInvertible => write!(f, "value is not invertible"),
            KernelError::IncompleteBuild { unset } => {
                write!(f, "build() with {} declared cell(s) still unset", unset)
            }
        }
    }
}

impl std::error::Error for KernelError {}

/// Result type alias for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;
