use crate::SparseMatrix;
use ark_std::{
    ops::{Add, Mul, MulAssign, Neg, Sub},
    Zero,
};

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<R: Clone + Zero> Transpose for SparseMatrix<R> {
    fn transpose(&self) -> Self {
        let mut res = SparseMatrix::new(self.ncols(), self.nrows());
        for (&(row, col), value) in self.iter() {
            res.set(col, row, value.clone());
        }
        res
    }
}

impl<R: Clone + Zero> Add for &SparseMatrix<R> {
    type Output = SparseMatrix<R>;

    fn add(self, other: Self) -> SparseMatrix<R> {
        self.try_add(other).unwrap()
    }
}

impl<R: Clone + Zero + Sub<Output = R>> Sub for &SparseMatrix<R> {
    type Output = SparseMatrix<R>;

    fn sub(self, other: Self) -> SparseMatrix<R> {
        self.try_sub(other).unwrap()
    }
}

impl<R: Clone + Zero + Mul<Output = R>> Mul for &SparseMatrix<R> {
    type Output = SparseMatrix<R>;

    fn mul(self, other: Self) -> SparseMatrix<R> {
        self.try_mul(other).unwrap()
    }
}

impl<R: Clone + Zero + Neg<Output = R>> Neg for &SparseMatrix<R> {
    type Output = SparseMatrix<R>;

    fn neg(self) -> SparseMatrix<R> {
        let mut res = SparseMatrix::new(self.nrows(), self.ncols());
        for (&(row, col), value) in self.iter() {
            res.set(row, col, -value.clone());
        }
        res
    }
}

impl<R: Zero + for<'a> MulAssign<&'a R>> MulAssign<&R> for SparseMatrix<R> {
    fn mul_assign(&mut self, r: &R) {
        self.scale(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_matrix() -> SparseMatrix<i64> {
        SparseMatrix::from_entries(3, 3, [(0, 1, 2), (2, 0, 1), (2, 1, 4), (2, 2, 3)])
    }

    #[test]
    fn test_transpose_sparse_matrix() {
        let transposed = sample_matrix().transpose();

        assert_eq!(
            transposed,
            SparseMatrix::from_entries(3, 3, [(1, 0, 2), (0, 2, 1), (1, 2, 4), (2, 2, 3)])
        );
    }

    #[test]
    fn test_transpose_involution() {
        let m = SparseMatrix::<i64>::rand(&mut ChaCha8Rng::seed_from_u64(11), 4, 7, 0.8);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().dims(), (7, 4));
    }

    #[test]
    fn test_operator_sugar_matches_try_ops() {
        let a = sample_matrix();
        let b = SparseMatrix::from_entries(3, 3, [(0, 1, -2), (1, 1, 5)]);

        assert_eq!(&a + &b, a.try_add(&b).unwrap());
        assert_eq!(&a - &b, a.try_sub(&b).unwrap());
        assert_eq!(&a * &b, a.try_mul(&b).unwrap());
    }

    #[test]
    fn test_neg() {
        let a = sample_matrix();
        let negated = -&a;

        assert_eq!(negated.get(0, 1), -2);
        assert_eq!(negated.nnz(), a.nnz());
        assert_eq!((&a + &negated).nnz(), 0);
    }

    #[test]
    fn test_sub_is_add_of_negation() {
        let a = sample_matrix();
        let b = SparseMatrix::from_entries(3, 3, [(0, 1, 7), (2, 2, 3), (1, 0, -6)]);

        assert_eq!(&a - &b, &a + &-&b);
    }

    #[test]
    fn test_scalar_mul() {
        let mut m = sample_matrix();
        m *= &3;

        assert_eq!(
            m,
            SparseMatrix::from_entries(3, 3, [(0, 1, 6), (2, 0, 3), (2, 1, 12), (2, 2, 9)])
        );
    }

    #[test]
    fn test_scalar_mul_by_zero_clears() {
        let mut m = sample_matrix();
        m *= &0;

        assert_eq!(m.nnz(), 0);
        assert_eq!(m.dims(), (3, 3));
    }
}
