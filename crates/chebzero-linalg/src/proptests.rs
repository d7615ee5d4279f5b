//! Property-based tests for the dense solver.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense_matrix::DenseMatrix;

    // Strategy for diagonally dominant symmetric matrices, always invertible
    fn dominant_symmetric(n: usize) -> impl Strategy<Value = DenseMatrix<f64>> {
        proptest::collection::vec(-1.0f64..1.0, n * n).prop_map(move |vals| {
            let mut m = DenseMatrix::zeros(n, n);
            for i in 0..n {
                for j in 0..=i {
                    m[(i, j)] = vals[i * n + j];
                    m[(j, i)] = vals[i * n + j];
                }
            }
            for i in 0..n {
                let off: f64 = (0..n).filter(|&j| j != i).map(|j| m[(i, j)].abs()).sum();
                m[(i, i)] = off + 1.0;
            }
            m
        })
    }

    fn sized_system() -> impl Strategy<Value = (DenseMatrix<f64>, Vec<f64>)> {
        (1usize..=6).prop_flat_map(|n| {
            (
                dominant_symmetric(n),
                proptest::collection::vec(-10.0f64..10.0, n),
            )
        })
    }

    fn multiply(a: &DenseMatrix<f64>, x: &[f64]) -> Vec<f64> {
        (0..a.num_rows())
            .map(|i| a.row(i).iter().zip(x).map(|(a, x)| a * x).sum())
            .collect()
    }

    proptest! {
        #[test]
        fn lu_solve_recovers_solution((a, x) in sized_system()) {
            let b = multiply(&a, &x);
            let lu = a.lu().expect("dominant matrices are invertible");
            prop_assert_eq!(lu.dim(), a.num_rows());
            for (got, want) in lu.solve(&b).iter().zip(&x) {
                prop_assert!((got - want).abs() < 1e-9);
            }
        }

        #[test]
        fn duplicated_row_has_no_lu((a, _x) in sized_system()) {
            let n = a.num_rows();
            prop_assume!(n >= 2);
            let mut rows: Vec<Vec<f64>> = (0..n).map(|i| a.row(i).to_vec()).collect();
            rows[n - 1] = rows[0].clone();
            prop_assert!(DenseMatrix::from_rows(rows).lu().is_none());
        }

        #[test]
        fn zero_column_has_no_lu((a, _x) in sized_system(), col in 0usize..6) {
            let n = a.num_rows();
            let col = col % n;
            let rows: Vec<Vec<f64>> = (0..n)
                .map(|i| {
                    let mut row = a.row(i).to_vec();
                    row[col] = 0.0;
                    row
                })
                .collect();
            prop_assert!(DenseMatrix::from_rows(rows).lu().is_none());
        }
    }
}
