// ============================================================================
// Dense Vector
// One-based, total, immutable vector with builder-validated construction
// ============================================================================

use super::element::Ring;
use crate::numeric::{KernelError, KernelResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable dense vector over a [`Ring`] element type, keyed one-based:
/// `index ∈ [1, size]`, every slot populated.
///
/// The one-dimensional counterpart of [`Matrix`](super::Matrix); built
/// through [`VectorBuilder`] or [`from_elements`](Vector::from_elements).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<E> {
    elements: Vec<E>,
}

impl<E: Ring> Vector<E> {
    pub(crate) fn from_raw(elements: Vec<E>) -> Self {
        debug_assert!(!elements.is_empty());
        Self { elements }
    }

    /// Build from an element list.
    ///
    /// # Errors
    /// `ZeroLength` for an empty list.
    pub fn from_elements(elements: Vec<E>) -> KernelResult<Self> {
        if elements.is_empty() {
            return Err(KernelError::ZeroLength);
        }
        Ok(Self::from_raw(elements))
    }

    /// Number of elements
    #[inline]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Element at the one-based `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` outside `[1, size]`.
    pub fn get(&self, index: usize) -> KernelResult<&E> {
        if index == 0 || index > self.elements.len() {
            return Err(KernelError::IndexOutOfRange {
                index,
                size: self.elements.len(),
            });
        }
        Ok(&self.elements[index - 1])
    }

    #[inline]
    pub(crate) fn cells(&self) -> &[E] {
        &self.elements
    }

    fn check_same_size(&self, other: &Self) -> KernelResult<()> {
        if self.size() != other.size() {
            return Err(KernelError::LengthMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Element-wise sum; lengths must match.
    pub fn add(&self, other: &Self) -> KernelResult<Self> {
        self.check_same_size(other)?;
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a.clone() + b.clone())
            .collect();
        Ok(Self::from_raw(elements))
    }

    /// Element-wise difference; lengths must match.
    pub fn sub(&self, other: &Self) -> KernelResult<Self> {
        self.check_same_size(other)?;
        let elements = self
            .elements
            .iter()
            .zip(&other.elements)
            .map(|(a, b)| a.clone() - b.clone())
            .collect();
        Ok(Self::from_raw(elements))
    }

    /// Multiply every element by `scalar`.
    pub fn scalar_mul(&self, scalar: &E) -> Self {
        let elements = self
            .elements
            .iter()
            .map(|element| scalar.clone() * element.clone())
            .collect();
        Self::from_raw(elements)
    }

    /// Additive inverse: scalar multiplication by `-1`.
    pub fn neg(&self) -> Self {
        self.scalar_mul(&-E::one())
    }

    /// Dot product; lengths must match.
    pub fn dot(&self, other: &Self) -> KernelResult<E> {
        self.check_same_size(other)?;
        let mut acc = E::zero();
        for (a, b) in self.elements.iter().zip(&other.elements) {
            acc = acc + a.clone() * b.clone();
        }
        Ok(acc)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Two-phase construction for [`Vector`], mirroring
/// [`MatrixBuilder`](super::MatrixBuilder).
#[derive(Debug, Clone)]
pub struct VectorBuilder<E> {
    slots: Vec<Option<E>>,
}

impl<E: Ring> VectorBuilder<E> {
    /// Stage a vector of the given length with every slot unset.
    ///
    /// # Errors
    /// `ZeroLength` unless `size` is positive.
    pub fn new(size: usize) -> KernelResult<Self> {
        if size == 0 {
            return Err(KernelError::ZeroLength);
        }
        Ok(Self {
            slots: vec![None; size],
        })
    }

    /// Set the slot at the one-based `index`.
    ///
    /// # Errors
    /// `IndexOutOfRange` outside the declared length.
    pub fn put(&mut self, index: usize, value: E) -> KernelResult<&mut Self> {
        if index == 0 || index > self.slots.len() {
            return Err(KernelError::IndexOutOfRange {
                index,
                size: self.slots.len(),
            });
        }
        self.slots[index - 1] = Some(value);
        Ok(self)
    }

    /// Fill every still-unset slot with clones of `value`.
    pub fn put_all(&mut self, value: E) -> &mut Self {
        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            *slot = Some(value.clone());
        }
        self
    }

    /// Freeze the staging area into an immutable [`Vector`].
    ///
    /// # Errors
    /// `IncompleteBuild` if any declared slot is still unset.
    pub fn build(self) -> KernelResult<Vector<E>> {
        let unset = self.slots.iter().filter(|slot| slot.is_none()).count();
        if unset > 0 {
            return Err(KernelError::IncompleteBuild { unset });
        }
        Ok(Vector::from_raw(self.slots.into_iter().flatten().collect()))
    }
}
