//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size and supports the row operations of the tableau.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::Itertools;

use crate::data::number_types::traits::Field;

/// Uses a `Vec` as underlying data a structure. Length is fixed at creation.
///
/// All arithmetic is done element wise and in place; none of the methods change the length.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dense<F> {
    data: Vec<F>,
}

impl<F> Dense<F> {
    /// Create a `Dense` vector from the provided data.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// All values, as a slice.
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }
}

impl<F: Field> Dense<F> {
    /// Create a vector with all values equal to zero.
    ///
    /// # Arguments
    ///
    /// * `len`: Length of the vector, number of elements.
    pub fn zeros(len: usize) -> Self {
        Self { data: vec![F::zero(); len] }
    }

    /// Subtract a multiple of another vector from this one.
    ///
    /// This is the elimination step of a pivot.
    pub fn sub_multiple(&mut self, multiple: &F, other: &Self) {
        debug_assert_eq!(self.len(), other.len());

        if multiple.is_zero() {
            return;
        }

        for (value, other_value) in self.data.iter_mut().zip(&other.data) {
            if !other_value.is_zero() {
                *value -= &(multiple.clone() * other_value);
            }
        }
    }

    /// Add another vector to this one.
    pub fn add_assign_vector(&mut self, other: &Self) {
        debug_assert_eq!(self.len(), other.len());

        for (value, other_value) in self.data.iter_mut().zip(&other.data) {
            *value += other_value;
        }
    }

    /// Divide every value by a constant.
    ///
    /// This is the normalization step of a pivot.
    ///
    /// # Arguments
    ///
    /// * `divisor`: Nonzero value.
    pub fn div_assign_scalar(&mut self, divisor: &F) {
        debug_assert!(!divisor.is_zero());

        for value in &mut self.data {
            *value /= divisor;
        }
    }

    /// Create a new vector containing only the values at the given indices, in the given order.
    pub fn select(&self, indices: impl IntoIterator<Item=usize>) -> Self {
        Self {
            data: indices.into_iter().map(|i| self.data[i].clone()).collect(),
        }
    }

    /// Whether this vector equals the `i`th unit vector.
    pub fn is_unit_vector(&self, i: usize) -> bool {
        debug_assert!(i < self.len());

        self.data.iter().enumerate()
            .all(|(j, value)| if j == i { value.is_one() } else { value.is_zero() })
    }
}

impl<F> Index<usize> for Dense<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F> IndexMut<usize> for Dense<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<F: Display> Display for Dense<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}
