// ============================================================================
// Dense Matrix
// One-based, total, immutable matrix with builder-validated construction
// ============================================================================

use super::element::Ring;
use super::vector::Vector;
use crate::numeric::{KernelError, KernelResult, MathContext};
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable dense matrix over a [`Ring`] element type, keyed one-based:
/// `(row, column) ∈ [1, rows] × [1, columns]`, every cell populated.
///
/// Instances are built only through [`MatrixBuilder`], which guarantees
/// totality over the declared shape. All operations are pure; arithmetic
/// on the entries is exact (whatever the element type provides), so no
/// rounding happens inside the engine itself.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use numeric_kernel::matrix::MatrixBuilder;
///
/// let mut builder = MatrixBuilder::new(2, 2).unwrap();
/// builder.put(1, 1, BigInt::from(1)).unwrap();
/// builder.put(1, 2, BigInt::from(2)).unwrap();
/// builder.put(2, 1, BigInt::from(3)).unwrap();
/// builder.put(2, 2, BigInt::from(4)).unwrap();
/// let m = builder.build().unwrap();
/// assert_eq!(m.det().unwrap(), BigInt::from(-2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Matrix<E> {
    rows: usize,
    columns: usize,
    cells: Vec<E>,
}

impl<E: Ring> Matrix<E> {
    /// Internal constructor for shapes already known to be consistent.
    pub(crate) fn from_raw(rows: usize, columns: usize, cells: Vec<E>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Build from nested rows.
    ///
    /// # Errors
    /// - `ZeroDimension` for an empty outer or inner vector
    /// - `LengthMismatch` for ragged rows
    pub fn from_rows(rows: Vec<Vec<E>>) -> KernelResult<Self> {
        let row_count = rows.len();
        let column_count = rows.first().map_or(0, Vec::len);
        if row_count == 0 || column_count == 0 {
            return Err(KernelError::ZeroDimension {
                rows: row_count,
                columns: column_count,
            });
        }
        let mut cells = Vec::with_capacity(row_count * column_count);
        for row in rows {
            if row.len() != column_count {
                return Err(KernelError::LengthMismatch {
                    left: column_count,
                    right: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self::from_raw(row_count, column_count, cells))
    }

    /// Number of rows
    #[inline]
    pub fn row_size(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn column_size(&self) -> usize {
        self.columns
    }

    /// Entry at the one-based key `(row, column)`.
    ///
    /// # Errors
    /// `KeyOutOfRange` outside `[1, rows] × [1, columns]`.
    pub fn get(&self, row: usize, column: usize) -> KernelResult<&E> {
        self.check_key(row, column)?;
        Ok(self.entry(row, column))
    }

    fn check_key(&self, row: usize, column: usize) -> KernelResult<()> {
        if row == 0 || row > self.rows || column == 0 || column > self.columns {
            return Err(KernelError::KeyOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    #[inline]
    fn entry(&self, row: usize, column: usize) -> &E {
        &self.cells[(row - 1) * self.columns + (column - 1)]
    }

    fn check_same_shape(&self, other: &Self) -> KernelResult<()> {
        if self.rows != other.rows || self.columns != other.columns {
            return Err(KernelError::ShapeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum; shapes must match.
    pub fn add(&self, other: &Self) -> KernelResult<Self> {
        self.check_same_shape(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self::from_raw(self.rows, self.columns, cells))
    }

    /// Element-wise difference; shapes must match.
    pub fn sub(&self, other: &Self) -> KernelResult<Self> {
        self.check_same_shape(other)?;
        let cells = self
            .cells
            .iter()
            .zip(&other.cells)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self::from_raw(self.rows, self.columns, cells))
    }

    /// Matrix product; requires `self.columns == other.rows`.
    /// Cell `(i, j)` is the dot product of row `i` and column `j`.
    pub fn mul(&self, other: &Self) -> KernelResult<Self> {
        if self.columns != other.rows {
            return Err(KernelError::ShapeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }
        let mut cells = Vec::with_capacity(self.rows * other.columns);
        for row in 1..=self.rows {
            for column in 1..=other.columns {
                let mut acc = E::zero();
                for k in 1..=self.columns {
                    acc = acc + self.entry(row, k).clone() * other.entry(k, column).clone();
                }
                cells.push(acc);
            }
        }
        Ok(Self::from_raw(self.rows, other.columns, cells))
    }

    /// Matrix-vector product; requires `self.columns == vector.size()`.
    pub fn mul_vector(&self, vector: &Vector<E>) -> KernelResult<Vector<E>> {
        if self.columns != vector.size() {
            return Err(KernelError::LengthMismatch {
                left: self.columns,
                right: vector.size(),
            });
        }
        let mut elements = Vec::with_capacity(self.rows);
        for row in 1..=self.rows {
            let mut acc = E::zero();
            for (k, element) in vector.cells().iter().enumerate() {
                acc = acc + self.entry(row, k + 1).clone() * element.clone();
            }
            elements.push(acc);
        }
        Ok(Vector::from_raw(elements))
    }

    /// Multiply every cell by `scalar`.
    pub fn scalar_mul(&self, scalar: &E) -> Self {
        let cells = self
            .cells
            .iter()
            .map(|cell| scalar.clone() * cell.clone())
            .collect();
        Self::from_raw(self.rows, self.columns, cells)
    }

    /// Additive inverse: scalar multiplication by `-1`.
    pub fn neg(&self) -> Self {
        self.scalar_mul(&-E::one())
    }

    /// Swap row and column keys.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.rows * self.columns);
        for column in 1..=self.columns {
            for row in 1..=self.rows {
                cells.push(self.entry(row, column).clone());
            }
        }
        Self::from_raw(self.columns, self.rows, cells)
    }

    // ========================================================================
    // Structural Predicates
    // ========================================================================

    /// Equal row and column count
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Square with every entry strictly below the diagonal zero
    pub fn is_upper_triangular(&self) -> bool {
        self.is_square()
            && (1..=self.rows)
                .all(|row| (1..row).all(|column| self.entry(row, column).is_zero()))
    }

    /// Square with every entry strictly above the diagonal zero
    pub fn is_lower_triangular(&self) -> bool {
        self.is_square()
            && (1..=self.rows)
                .all(|row| (row + 1..=self.columns).all(|column| self.entry(row, column).is_zero()))
    }

    /// Upper or lower triangular
    pub fn is_triangular(&self) -> bool {
        self.is_upper_triangular() || self.is_lower_triangular()
    }

    /// Upper and lower triangular
    pub fn is_diagonal(&self) -> bool {
        self.is_upper_triangular() && self.is_lower_triangular()
    }

    /// Square and equal to its own transpose
    pub fn is_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose()
    }

    /// Square and equal to the negation of its transpose
    pub fn is_skew_symmetric(&self) -> bool {
        self.is_square() && *self == self.transpose().neg()
    }

    /// Diagonal with every diagonal entry equal to one
    pub fn is_identity(&self) -> bool {
        self.is_diagonal() && (1..=self.rows).all(|k| self.entry(k, k).is_one())
    }

    // ========================================================================
    // Determinant and Friends
    // ========================================================================

    /// Submatrix with `row` and `column` deleted and the remaining keys
    /// re-indexed contiguously from 1.
    ///
    /// # Errors
    /// - `KeyOutOfRange` for an invalid key
    /// - `ZeroDimension` when deleting from a single row or column would
    ///   leave an empty shape
    pub fn minor(&self, row: usize, column: usize) -> KernelResult<Self> {
        self.check_key(row, column)?;
        if self.rows == 1 || self.columns == 1 {
            return Err(KernelError::ZeroDimension {
                rows: self.rows - 1,
                columns: self.columns - 1,
            });
        }
        let mut cells = Vec::with_capacity((self.rows - 1) * (self.columns - 1));
        for r in (1..=self.rows).filter(|&r| r != row) {
            for c in (1..=self.columns).filter(|&c| c != column) {
                cells.push(self.entry(r, c).clone());
            }
        }
        Ok(Self::from_raw(self.rows - 1, self.columns - 1, cells))
    }

    /// Signed minor: `(−1)^(row+column) · det(minor(row, column))`.
    pub fn cofactor(&self, row: usize, column: usize) -> KernelResult<E> {
        let minor_det = self.minor(row, column)?.det()?;
        Ok(if (row + column) % 2 == 0 {
            minor_det
        } else {
            -minor_det
        })
    }

    /// Determinant by Laplace expansion along the first row.
    ///
    /// Exponential in the matrix size by design; this kernel deliberately
    /// carries no optimized (LU-style) determinant.
    ///
    /// # Errors
    /// `NotSquare` for non-square matrices.
    pub fn det(&self) -> KernelResult<E> {
        if !self.is_square() {
            return Err(KernelError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.rows == 1 {
            return Ok(self.cells[0].clone());
        }
        let mut acc = E::zero();
        for column in 1..=self.columns {
            acc = acc + self.entry(1, column).clone() * self.cofactor(1, column)?;
        }
        Ok(acc)
    }

    /// Sum of the diagonal entries.
    ///
    /// # Errors
    /// `NotSquare` for non-square matrices.
    pub fn trace(&self) -> KernelResult<E> {
        if !self.is_square() {
            return Err(KernelError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        let mut acc = E::zero();
        for k in 1..=self.rows {
            acc = acc + self.entry(k, k).clone();
        }
        Ok(acc)
    }

    /// Whether the determinant differs from zero.
    ///
    /// # Errors
    /// `NotSquare` for non-square matrices.
    pub fn is_invertible(&self) -> KernelResult<bool> {
        Ok(!self.det()?.is_zero())
    }

    /// Transpose of the cofactor matrix; satisfies
    /// `A · adj(A) = det(A) · I`.
    ///
    /// # Errors
    /// `NotSquare` for non-square matrices.
    pub fn adjugate(&self) -> KernelResult<Self> {
        if !self.is_square() {
            return Err(KernelError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.rows == 1 {
            return Ok(Self::from_raw(1, 1, vec![E::one()]));
        }
        let mut cells = Vec::with_capacity(self.rows * self.columns);
        for row in 1..=self.rows {
            for column in 1..=self.columns {
                cells.push(self.cofactor(column, row)?);
            }
        }
        Ok(Self::from_raw(self.rows, self.columns, cells))
    }
}

impl Matrix<BigDecimal> {
    /// Multiplicative inverse via the adjugate, rounded at `mc`.
    ///
    /// # Errors
    /// - `NotSquare` for non-square matrices
    /// - `NotInvertible` when the determinant is zero
    pub fn inverse(&self, mc: &MathContext) -> KernelResult<Self> {
        let det = self.det()?;
        if det.is_zero() {
            return Err(KernelError::NotInvertible);
        }
        let inverse_det = mc.div(&BigDecimal::one(), &det)?;
        let cells = self
            .adjugate()?
            .cells
            .iter()
            .map(|cell| mc.round(&(cell * &inverse_det)))
            .collect();
        Ok(Self::from_raw(self.rows, self.columns, cells))
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Two-phase construction for [`Matrix`]: a pre-sized staging area in which
/// every declared key starts unset, frozen by a consuming [`build`].
///
/// [`build`]: MatrixBuilder::build
#[derive(Debug, Clone)]
pub struct MatrixBuilder<E> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<E>>,
}

impl<E: Ring> MatrixBuilder<E> {
    /// Stage a matrix of the given shape with every cell unset.
    ///
    /// # Errors
    /// `ZeroDimension` unless both dimensions are positive.
    pub fn new(rows: usize, columns: usize) -> KernelResult<Self> {
        if rows == 0 || columns == 0 {
            return Err(KernelError::ZeroDimension { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![None; rows * columns],
        })
    }

    /// Set the cell at the one-based key `(row, column)`.
    /// Re-putting a key overwrites the earlier value.
    ///
    /// # Errors
    /// `KeyOutOfRange` outside the declared shape.
    pub fn put(&mut self, row: usize, column: usize, value: E) -> KernelResult<&mut Self> {
        if row == 0 || row > self.rows || column == 0 || column > self.columns {
            return Err(KernelError::KeyOutOfRange {
                row,
                column,
                rows: self.rows,
                columns: self.columns,
            });
        }
        self.cells[(row - 1) * self.columns + (column - 1)] = Some(value);
        Ok(self)
    }

    /// Fill every still-unset cell with clones of `value`.
    pub fn put_all(&mut self, value: E) -> &mut Self {
        for cell in self.cells.iter_mut().filter(|cell| cell.is_none()) {
            *cell = Some(value.clone());
        }
        self
    }

    /// Freeze the staging area into an immutable [`Matrix`].
    ///
    /// # Errors
    /// `IncompleteBuild` if any declared cell is still unset; the count of
    /// unset cells is reported.
    pub fn build(self) -> KernelResult<Matrix<E>> {
        let unset = self.cells.iter().filter(|cell| cell.is_none()).count();
        if unset > 0 {
            return Err(KernelError::IncompleteBuild { unset });
        }
        let cells = self.cells.into_iter().flatten().collect();
        Ok(Matrix::from_raw(self.rows, self.columns, cells))
    }
}
