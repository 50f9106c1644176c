use crate::MatrixError;
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, SerializationError, Valid, Validate,
};
use ark_std::{
    collections::BTreeMap,
    io::{Read, Write},
    ops::{Mul, MulAssign, Sub},
    rand::Rng,
    vec::*,
    One, UniformRand, Zero,
};
use serde::{Deserialize, Serialize};

/// Integer-valued matrix storing only its non-zero entries.
///
/// Entries are keyed by `(row, col)`; an absent key reads as zero. The map
/// never holds a zero value: writing zero through [`SparseMatrix::set`]
/// removes the entry instead. Dimensions are fixed at construction.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SparseMatrix<R> {
    nrows: usize,
    ncols: usize,
    entries: BTreeMap<(usize, usize), R>,
}

impl<R> SparseMatrix<R> {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: BTreeMap::new(),
        }
    }

    pub fn empty() -> Self {
        Self::new(0, 0)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Stored entries in `(row, col)` order.
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &R)> {
        self.entries.iter()
    }
}

impl<R: Zero> SparseMatrix<R> {
    /// Write `value` at `(row, col)`; writing zero clears the position.
    ///
    /// Coordinates are not checked against the declared dimensions; an
    /// out-of-range write is stored and shows up in the canonical listing.
    pub fn set(&mut self, row: usize, col: usize, value: R) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Build a matrix by applying `set` per triple, in sequence order.
    /// Later triples for the same position overwrite earlier ones.
    pub fn from_entries<I>(nrows: usize, ncols: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, R)>,
    {
        let mut m = Self::new(nrows, ncols);
        for (row, col, value) in entries {
            m.set(row, col, value);
        }
        m
    }
}

impl<R: Clone + Zero> SparseMatrix<R> {
    /// Value at `(row, col)`, or zero if the position holds no entry.
    pub fn get(&self, row: usize, col: usize) -> R {
        self.entries
            .get(&(row, col))
            .cloned()
            .unwrap_or_else(R::zero)
    }

    /// Canonical triples: `(row, col, value)` sorted by row, then column.
    pub fn to_entries(&self) -> Vec<(usize, usize, R)> {
        self.entries
            .iter()
            .map(|(&(row, col), value)| (row, col, value.clone()))
            .collect()
    }
}

impl<R: Zero + One> SparseMatrix<R> {
    pub fn identity(n: usize) -> Self {
        let mut m = Self::new(n, n);
        for i in 0..n {
            m.set(i, i, R::one());
        }
        m
    }
}

impl<R: Zero + for<'a> MulAssign<&'a R>> SparseMatrix<R> {
    /// Multiply every stored entry by `r`, dropping entries that vanish.
    pub fn scale(&mut self, r: &R) {
        self.entries.values_mut().for_each(|value| *value *= r);
        self.entries.retain(|_, value| !value.is_zero());
    }
}

impl<R: UniformRand + Zero> SparseMatrix<R> {
    /// Create a random sparse matrix with an approximate `sparsity` ratio of zeroes
    pub fn rand<RND: Rng>(rng: &mut RND, nrows: usize, ncols: usize, sparsity: f64) -> Self {
        let mut m = Self::new(nrows, ncols);
        for row in 0..nrows {
            for col in 0..ncols {
                if !rng.gen_bool(sparsity) {
                    m.set(row, col, R::rand(rng));
                }
            }
        }
        m
    }
}

impl<R: Clone + Zero> SparseMatrix<R> {
    /// Entrywise sum, or `None` on differing dimensions.
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.dims() != other.dims() {
            return None;
        }

        let mut result = Self {
            nrows: self.nrows,
            ncols: self.ncols,
            entries: self.entries.clone(),
        };
        for (&(row, col), value) in other.entries.iter() {
            let sum = result.get(row, col) + value.clone();
            result.set(row, col, sum);
        }
        Some(result)
    }

    pub fn try_add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_add(other).ok_or(MatrixError::DimensionMismatch(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }
}

impl<R: Clone + Zero + Sub<Output = R>> SparseMatrix<R> {
    /// Entrywise difference `self - other`, or `None` on differing dimensions.
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.dims() != other.dims() {
            return None;
        }

        let mut result = Self {
            nrows: self.nrows,
            ncols: self.ncols,
            entries: self.entries.clone(),
        };
        for (&(row, col), value) in other.entries.iter() {
            let diff = result.get(row, col) - value.clone();
            result.set(row, col, diff);
        }
        Some(result)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_sub(other).ok_or(MatrixError::DimensionMismatch(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }
}

impl<R: Clone + Zero + Mul<Output = R>> SparseMatrix<R> {
    /// Matrix product, or `None` when `self.ncols != other.nrows`.
    ///
    /// For each stored `(i, k)` of `self` only the stored row `k` of `other`
    /// is scanned, so the cost is proportional to the matched entry pairs
    /// rather than the full cross product of both entry sets.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if self.ncols != other.nrows {
            return None;
        }

        let mut result = Self::new(self.nrows, other.ncols);
        for (&(i, k), a) in self.entries.iter() {
            for (&(_, j), b) in other.entries.range((k, 0)..=(k, usize::MAX)) {
                let acc = result.get(i, j) + a.clone() * b.clone();
                result.set(i, j, acc);
            }
        }
        Some(result)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.checked_mul(other).ok_or(MatrixError::DimensionMismatch(
            self.nrows,
            self.ncols,
            other.nrows,
            other.ncols,
        ))
    }
}

impl<R: CanonicalSerialize> CanonicalSerialize for SparseMatrix<R> {
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> Result<(), SerializationError> {
        let nrows = self.nrows as u64;
        let ncols = self.ncols as u64;
        nrows.serialize_with_mode(&mut writer, compress)?;
        ncols.serialize_with_mode(&mut writer, compress)?;
        self.entries.serialize_with_mode(&mut writer, compress)?;
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        8 + 8 + self.entries.serialized_size(compress)
    }
}

impl<R: CanonicalDeserialize> Valid for SparseMatrix<R> {
    fn check(&self) -> Result<(), SerializationError> {
        BTreeMap::<(usize, usize), R>::check(&self.entries)
    }
}

impl<R: CanonicalDeserialize> CanonicalDeserialize for SparseMatrix<R> {
    fn deserialize_with_mode<Re: Read>(
        mut reader: Re,
        compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let nrows = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let ncols = u64::deserialize_with_mode(&mut reader, compress, validate)? as usize;
        let entries =
            BTreeMap::<(usize, usize), R>::deserialize_with_mode(&mut reader, compress, validate)?;
        Ok(Self {
            nrows,
            ncols,
            entries,
        })
    }
}
