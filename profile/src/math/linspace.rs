use num_traits::{Float, FromPrimitive};

/// Returns `n` evenly spaced values from `y_start` to `y_end`
/// inclusive.
///
/// A single value is `y_start`.
pub fn linspace<T>(y_start: T, y_end: T, n: usize) -> impl Iterator<Item = T>
where
    T: Float + FromPrimitive,
{
    let dy = if n > 1 {
        (y_end - y_start) / T::from_usize(n - 1).unwrap_or_else(T::max_value)
    } else {
        T::zero()
    };
    (0..n).map(move |x| {
        if x + 1 == n && n > 1 {
            y_end
        } else {
            y_start + T::from_usize(x).unwrap_or_else(T::zero) * dy
        }
    })
}

#[cfg(test)]
mod tests {
    use super::linspace;

    #[test]
    fn test_linspace() {
        assert_eq!(
            linspace(0.0, 1.0, 5).collect::<Vec<f64>>(),
            vec![0.0, 0.25, 0.5, 0.75, 1.0]
        );
        assert_eq!(linspace(2.0, 3.0, 1).collect::<Vec<f64>>(), vec![2.0]);
        assert_eq!(linspace(2.0, 3.0, 0).count(), 0);
    }

    #[test]
    fn test_linspace_hits_end() {
        let v: Vec<f32> = linspace(0.0, 0.3, 7).collect();
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], 0.0);
        assert_eq!(v[6], 0.3);
    }
}
