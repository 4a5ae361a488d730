// ============================================================================
// Matrix Module
// Dense, builder-validated matrix/vector algebra engine
// ============================================================================
//
// This module provides:
// - Matrix<E> / Vector<E>: immutable, one-based, dense and total by
//   construction
// - MatrixBuilder / VectorBuilder: two-phase staging that guarantees every
//   declared cell is populated before freezing
// - Ring: the capability bound satisfied by all kernel number types
//
// Design principles:
// - Construction is validated once; every built instance is total, so cell
//   access inside the algorithms never fails
// - Determinants use Laplace expansion, exponential by design (an optimized
//   determinant is an explicit non-goal)
// - The engine knows nothing about complex numbers; the complex types
//   depend on it for their 2x2 representation, not the other way around

mod element;
#[allow(clippy::module_inception)]
mod matrix;
mod vector;

pub use element::Ring;
pub use matrix::{Matrix, MatrixBuilder};
pub use vector::{Vector, VectorBuilder};
