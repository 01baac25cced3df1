use geo::{coord, CoordFloat, Line};
use itertools::Itertools;
use num_traits::FromPrimitive;

/// Returns `n` equal bar lengths that together span `width`.
pub fn bar_lengths<T>(n: usize, width: T) -> Vec<T>
where
    T: CoordFloat + FromPrimitive,
{
    match T::from_usize(n) {
        Some(count) if n > 0 => vec![width / count; n],
        _ => Vec::new(),
    }
}

/// Returns the cut lines outlining a profile of `heights` placed at
/// equal steps of `width / heights.len()`.
///
/// The outline is the profile itself, point to point, followed by
/// the bottom, left and right edges of the piece.
pub fn cut_paths<T>(heights: &[T], width: T) -> Vec<Line<T>>
where
    T: CoordFloat + FromPrimitive,
{
    let (Some(&first), Some(&last), Some(n)) =
        (heights.first(), heights.last(), T::from_usize(heights.len()))
    else {
        return Vec::new();
    };
    let step = width / n;
    let x_at = |i: usize| T::from_usize(i).map_or_else(T::nan, |i| i * step);
    let end_x = x_at(heights.len() - 1);
    let zero = T::zero();

    let mut lines: Vec<Line<T>> = heights
        .iter()
        .enumerate()
        .tuple_windows()
        .map(|((i, &h0), (j, &h1))| {
            Line::new(coord! { x: x_at(i), y: h0 }, coord! { x: x_at(j), y: h1 })
        })
        .collect();

    lines.push(Line::new(coord! { x: zero, y: zero }, coord! { x: end_x, y: zero }));
    lines.push(Line::new(coord! { x: zero, y: zero }, coord! { x: zero, y: first }));
    lines.push(Line::new(coord! { x: end_x, y: zero }, coord! { x: end_x, y: last }));
    lines
}

#[cfg(test)]
mod tests {
    use super::{bar_lengths, cut_paths};
    use geo::{coord, Line};

    #[test]
    fn test_bar_lengths() {
        assert_eq!(bar_lengths(4, 180.0), vec![45.0; 4]);
        assert!(bar_lengths(0, 180.0).is_empty());
        let total: f64 = bar_lengths(7, 180.0).iter().sum();
        approx::assert_relative_eq!(total, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cut_paths() {
        let lines = cut_paths(&[10.0, 20.0, 15.0], 180.0);
        let expected = vec![
            Line::new(coord! { x: 0.0, y: 10.0 }, coord! { x: 60.0, y: 20.0 }),
            Line::new(coord! { x: 60.0, y: 20.0 }, coord! { x: 120.0, y: 15.0 }),
            Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 120.0, y: 0.0 }),
            Line::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 0.0, y: 10.0 }),
            Line::new(coord! { x: 120.0, y: 0.0 }, coord! { x: 120.0, y: 15.0 }),
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_cut_paths_degenerate() {
        assert!(cut_paths::<f64>(&[], 180.0).is_empty());
        // One sample: no profile segments, just the (zero width) box.
        assert_eq!(cut_paths(&[5.0], 180.0).len(), 3);
    }
}
