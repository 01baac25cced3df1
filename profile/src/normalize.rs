use log::warn;
use num_traits::Float;

/// Linearly rescales `elevations` so the lowest maps to `min_height`
/// and the highest to `min_height + multiplier`.
///
/// A flat profile has no range to scale; every value becomes
/// `min_height`.
pub fn normalize<T: Float>(elevations: &[T], min_height: T, multiplier: T) -> Vec<T> {
    let (e_min, e_max) = elevations
        .iter()
        .fold((T::infinity(), T::neg_infinity()), |(lo, hi), &e| {
            (lo.min(e), hi.max(e))
        });
    let range = e_max - e_min;

    if elevations.is_empty() {
        Vec::new()
    } else if range == T::zero() {
        warn!("flat elevation profile, all heights set to the minimum");
        vec![min_height; elevations.len()]
    } else {
        elevations
            .iter()
            .map(|&e| min_height + multiplier * (e - e_min) / range)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::normalize;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize() {
        let out = normalize(&[1.0, 2.0, 3.0], 10.0, 30.0);
        let expected = [10.0, 25.0, 40.0];
        for (a, b) in out.iter().zip(expected) {
            assert_relative_eq!(*a, b);
        }
    }

    #[test]
    fn test_normalize_order_independent() {
        let out = normalize(&[300.0, -100.0, 100.0], 0.0, 1.0);
        assert_relative_eq!(out[0], 1.0);
        assert_relative_eq!(out[1], 0.0);
        assert_relative_eq!(out[2], 0.5);
    }

    #[test]
    fn test_normalize_flat() {
        assert_eq!(normalize(&[5.0_f32; 4], 10.0, 30.0), vec![10.0; 4]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize::<f64>(&[], 10.0, 30.0).is_empty());
    }
}
