//! N-dimensional vector math.
//!
//! Vectors of different lengths are combined by padding the shorter one with
//! zeros, so a 3D point and a 4D point can be added without ceremony.

use std::fmt;
use std::hash::Hash;
use std::iter::Sum;
use std::ops::*;

use approx_collections::{ApproxEq, ApproxHash, Precision};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::{EPSILON, Float};

/// Constructs an N-dimensional vector, using the same syntax as `vec![]`.
#[macro_export]
macro_rules! vector {
    [$($tok:tt)*] => {
        $crate::Vector($crate::smallvec::smallvec![$($tok)*])
    };
}

/// N-dimensional vector. Indexing out of bounds returns zero.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Vector(pub SmallVec<[Float; 4]>);

/// Reference to an N-dimensional vector. Indexing out of bounds returns zero.
pub trait VectorRef: Sized + fmt::Debug {
    /// Returns the number of components in the vector.
    fn ndim(&self) -> u8;

    /// Returns a component of the vector. If the index is out of bounds,
    /// returns zero.
    fn get(&self, idx: u8) -> Float;

    /// Converts the vector to a `Vector`.
    fn to_vector(&self) -> Vector {
        self.iter().collect()
    }
    /// Converts the vector to a fixed-size array, truncating or padding with
    /// zeros as needed.
    fn to_array<const N: usize>(&self) -> [Float; N] {
        std::array::from_fn(|i| u8::try_from(i).map_or(0.0, |i| self.get(i)))
    }

    /// Returns an iterator over the components of the vector.
    fn iter(&self) -> VectorIter<&Self> {
        VectorIter {
            range: 0..self.ndim(),
            vector: self,
        }
    }

    /// Returns the dot product of this vector with another.
    fn dot(&self, rhs: impl VectorRef) -> Float {
        // Components past the end of the shorter vector contribute nothing.
        std::iter::zip(self.iter(), rhs.iter())
            .map(|(l, r)| l * r)
            .sum()
    }
    /// Returns the cross product of two vectors in 3D. Components besides XYZ
    /// are ignored.
    fn cross_product_3d(&self, rhs: impl VectorRef) -> Vector {
        vector![
            self.get(1) * rhs.get(2) - self.get(2) * rhs.get(1),
            self.get(2) * rhs.get(0) - self.get(0) * rhs.get(2),
            self.get(0) * rhs.get(1) - self.get(1) * rhs.get(0),
        ]
    }

    /// Pads the vector with zeros up to `ndim`.
    #[must_use]
    fn pad(&self, ndim: u8) -> Vector {
        self.iter().pad_using(ndim as usize, |_| 0.0).collect()
    }

    /// Returns the Euclidean norm of the vector.
    fn norm(&self) -> Float {
        self.norm2().sqrt()
    }
    /// Returns the squared Euclidean norm of the vector.
    fn norm2(&self) -> Float {
        self.dot(self)
    }
    /// Returns the Euclidean distance between two points.
    fn distance_to(&self, other: impl VectorRef) -> Float {
        Vector::zip(self, other)
            .map(|(l, r)| (l - r) * (l - r))
            .sum::<Float>()
            .sqrt()
    }

    /// Returns a normalized copy of the vector, or `None` if the vector is
    /// approximately zero.
    #[must_use]
    fn normalize(&self) -> Option<Vector> {
        let norm = self.norm();
        (norm > EPSILON).then(|| self.scale(1.0 / norm))
    }
    /// Returns a scaled copy of the vector.
    #[must_use]
    fn scale(&self, scalar: Float) -> Vector {
        self.iter().map(|x| x * scalar).collect()
    }

    /// Returns whether every component is finite.
    fn is_finite(&self) -> bool {
        self.iter().all(Float::is_finite)
    }
}

/// Iterator over the components of a vector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VectorIter<V> {
    range: Range<u8>,
    vector: V,
}
impl<V: VectorRef> Iterator for VectorIter<V> {
    type Item = Float;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|i| self.vector.get(i))
    }
}

impl VectorRef for Vector {
    fn ndim(&self) -> u8 {
        self.0.len().try_into().unwrap_or(u8::MAX)
    }
    fn get(&self, idx: u8) -> Float {
        self.0.get(idx as usize).copied().unwrap_or(0.0)
    }
}

impl VectorRef for &[Float] {
    fn ndim(&self) -> u8 {
        self.len().try_into().unwrap_or(u8::MAX)
    }
    fn get(&self, idx: u8) -> Float {
        <[Float]>::get(self, idx as usize).copied().unwrap_or(0.0)
    }
}

impl<const N: usize> VectorRef for [Float; N] {
    fn ndim(&self) -> u8 {
        N.try_into().unwrap_or(u8::MAX)
    }
    fn get(&self, idx: u8) -> Float {
        <[Float]>::get(self, idx as usize).copied().unwrap_or(0.0)
    }
}

impl<V: VectorRef> VectorRef for &'_ V {
    fn ndim(&self) -> u8 {
        (*self).ndim()
    }
    fn get(&self, idx: u8) -> Float {
        (*self).get(idx)
    }
}

macro_rules! impl_zero_padded_op {
    (impl $trait_name:ident for $type_name:ty { fn $fn_name:ident() }) => {
        impl<V: VectorRef> $trait_name<V> for $type_name {
            type Output = Vector;

            fn $fn_name(self, rhs: V) -> Self::Output {
                Vector::zip(self, rhs).map(|(l, r)| l.$fn_name(r)).collect()
            }
        }
    };
}
impl_zero_padded_op!(impl Add for Vector { fn add() });
impl_zero_padded_op!(impl Sub for Vector { fn sub() });
impl_zero_padded_op!(impl Add for &'_ Vector { fn add() });
impl_zero_padded_op!(impl Sub for &'_ Vector { fn sub() });

impl Neg for &'_ Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.iter().map(|n| -n).collect()
    }
}

impl<V: VectorRef> AddAssign<V> for Vector {
    fn add_assign(&mut self, rhs: V) {
        let ndim = std::cmp::max(self.ndim(), rhs.ndim());
        self.resize(ndim);
        for i in 0..rhs.ndim() {
            self[i] += rhs.get(i);
        }
    }
}
impl<V: VectorRef> SubAssign<V> for Vector {
    fn sub_assign(&mut self, rhs: V) {
        let ndim = std::cmp::max(self.ndim(), rhs.ndim());
        self.resize(ndim);
        for i in 0..rhs.ndim() {
            self[i] -= rhs.get(i);
        }
    }
}

impl Index<u8> for Vector {
    type Output = Float;

    fn index(&self, index: u8) -> &Self::Output {
        &self.0[index as usize]
    }
}
impl IndexMut<u8> for Vector {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        let ndim = self.ndim();
        self.0.get_mut(index as usize).unwrap_or_else(|| {
            panic!(
                "vector index out of bounds: the dimensionality is {ndim} but the index is {index}",
            )
        })
    }
}

impl Vector {
    /// Zero-dimensional empty vector.
    pub const EMPTY: Self = Self(SmallVec::new_const());

    /// Returns a zero vector.
    pub fn zero(ndim: u8) -> Self {
        let mut ret = Self::EMPTY;
        ret.resize(ndim);
        ret
    }
    /// Returns a unit vector along an axis.
    pub fn unit(axis: u8) -> Self {
        let mut ret = vector![0.0; axis as usize + 1];
        ret[axis] = 1.0;
        ret
    }

    /// Resizes the vector in-place, padding with zeros.
    pub fn resize(&mut self, ndim: u8) {
        self.0.resize(ndim as _, 0.0);
    }

    /// Returns an iterator over two vectors, both padded to the same length.
    pub fn zip<A: VectorRef, B: VectorRef>(
        a: A,
        b: B,
    ) -> std::iter::Zip<VectorIter<A>, VectorIter<B>> {
        let max_ndim = std::cmp::max(a.ndim(), b.ndim());
        std::iter::zip(
            VectorIter {
                range: 0..max_ndim,
                vector: a,
            },
            VectorIter {
                range: 0..max_ndim,
                vector: b,
            },
        )
    }
}

impl approx::AbsDiffEq for Vector {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        Vector::zip(self, other).all(|(l, r)| (l - r).abs() <= epsilon)
    }
}

impl ApproxEq for Vector {
    fn approx_eq(&self, other: &Self, prec: Precision) -> bool {
        Vector::zip(self, other).all(|(l, r)| prec.eq(l, r))
    }
}
impl ApproxHash for Vector {
    fn intern_floats<F: FnMut(&mut f64)>(&mut self, f: &mut F) {
        self.0.intern_floats(f);
    }

    fn interned_eq(&self, other: &Self) -> bool {
        Vector::zip(self, other).all(|(a, b)| a.interned_eq(&b))
    }

    fn interned_hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // Skip zeros so that trailing zeros do not affect the hash.
        for (i, x) in self.iter().enumerate() {
            if !x.interned_eq(&0.0) {
                i.hash(state);
                x.interned_hash(state);
            }
        }
    }
}

impl FromIterator<Float> for Vector {
    fn from_iter<T: IntoIterator<Item = Float>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: VectorRef> Sum<V> for Vector {
    fn sum<I: Iterator<Item = V>>(iter: I) -> Self {
        let mut ret = Self::EMPTY;
        for v in iter {
            ret += v;
        }
        ret
    }
}
