//! Anterograde/retrograde mixing of directed connectivity.

use nalgebra::DMatrix;

use crate::connectome::Connectome;

/// Blend a directed connectivity matrix with its transpose:
/// `C_dir = (1-s)·Cᵀ + s·C`.
///
/// `s = 0` is purely anterograde (spread along the transpose), `s = 1`
/// purely retrograde (spread along `C` as given); intermediate values mix
/// the two readings linearly. Values of `s` outside [0,1] are accepted
/// and produce a mathematically well-defined extrapolation.
pub fn directed_blend(connectome: &Connectome, s: f64) -> DMatrix<f64> {
    let c = connectome.matrix();
    c.transpose() * (1.0 - s) + c * s
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::DMatrix;
    use proptest::prelude::*;

    fn asymmetric() -> Connectome {
        Connectome::new(DMatrix::from_row_slice(2, 2, &[0.0, 2.0, 3.0, 0.0])).unwrap()
    }

    #[test]
    fn s_zero_is_pure_transpose() {
        let c = asymmetric();
        assert_eq!(directed_blend(&c, 0.0), c.matrix().transpose());
    }

    #[test]
    fn s_one_is_pure_original() {
        let c = asymmetric();
        assert_eq!(&directed_blend(&c, 1.0), c.matrix());
    }

    #[test]
    fn intermediate_s_blends_linearly() {
        let c = asymmetric();
        let blended = directed_blend(&c, 0.25);
        // 0.75·Cᵀ + 0.25·C entry by entry.
        let expected = DMatrix::from_row_slice(2, 2, &[0.0, 2.75, 2.25, 0.0]);
        assert_relative_eq!(blended, expected, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn symmetric_matrices_are_fixed_points(
            (n, w, s) in (1usize..6).prop_flat_map(|n| {
                (
                    Just(n),
                    proptest::collection::vec(0.0..10.0f64, n * n),
                    0.0..1.0f64,
                )
            })
        ) {
            let raw = DMatrix::from_row_slice(n, n, &w);
            let sym = Connectome::new(&raw + raw.transpose()).unwrap();
            let blended = directed_blend(&sym, s);
            for i in 0..n {
                for j in 0..n {
                    prop_assert!((blended[(i, j)] - sym.matrix()[(i, j)]).abs() < 1e-9);
                }
            }
        }
    }
}
