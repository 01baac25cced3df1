use num_traits::Float;

/// Piecewise linear interpolation of the points (`xp`, `fp`) at each
/// of the ascending `queries`.
///
/// Queries left of `xp[0]` take `fp[0]`, queries right of the last
/// point take the last value. Where several points share a position,
/// a query at that position takes the last of them. `xp` must be
/// non-decreasing and the same length as `fp`; both must be non-empty.
pub fn interp<T, I>(queries: I, xp: &[T], fp: &[T]) -> Vec<T>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    debug_assert_eq!(xp.len(), fp.len());
    debug_assert!(!xp.is_empty());
    let last = xp.len() - 1;
    let mut seg = 0;
    queries
        .into_iter()
        .map(|x| {
            if x < xp[0] {
                return fp[0];
            }
            if x >= xp[last] {
                return fp[last];
            }
            while seg + 1 < last && xp[seg + 1] <= x {
                seg += 1;
            }
            if xp[seg] == x {
                return fp[seg];
            }
            // xp[seg] < x < xp[seg + 1]
            let (x0, x1) = (xp[seg], xp[seg + 1]);
            let (f0, f1) = (fp[seg], fp[seg + 1]);
            f0 + (f1 - f0) * (x - x0) / (x1 - x0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::interp;
    use approx::assert_relative_eq;

    #[test]
    fn test_interp() {
        let xp = [0.0, 0.5, 1.0];
        let fp = [10.0, 20.0, 0.0];
        let out = interp([-1.0, 0.0, 0.25, 0.5, 0.75, 1.0, 2.0], &xp, &fp);
        let expected = [10.0, 10.0, 15.0, 20.0, 10.0, 0.0, 0.0];
        for (a, b) in out.iter().zip(expected) {
            assert_relative_eq!(*a, b);
        }
    }

    #[test]
    fn test_interp_repeated_position() {
        let xp = [0.0, 0.5, 0.5, 1.0];
        let fp = [0.0, 1.0, 3.0, 5.0];
        let out = interp([0.25, 0.5, 0.75], &xp, &fp);
        assert_relative_eq!(out[0], 0.5);
        // Exactly on the repeated position takes the last sample there.
        assert_relative_eq!(out[1], 3.0);
        assert_relative_eq!(out[2], 4.0);
    }

    #[test]
    fn test_interp_repeated_first_position() {
        let xp = [0.0, 0.0, 1.0];
        let fp = [100.0, 200.0, 300.0];
        let out = interp([0.0, 0.5, 1.0], &xp, &fp);
        assert_relative_eq!(out[0], 200.0);
        assert_relative_eq!(out[1], 250.0);
        assert_relative_eq!(out[2], 300.0);
    }

    #[test]
    fn test_interp_repeated_last_position() {
        let xp = [0.0, 1.0, 1.0];
        let fp = [0.0, 10.0, 20.0];
        let out = interp([0.5, 1.0], &xp, &fp);
        assert_relative_eq!(out[0], 5.0);
        assert_relative_eq!(out[1], 20.0);
    }
}
