use crate::ProfileError;
use geo::{algorithm::HaversineDistance, CoordFloat, Point};
use num_traits::FromPrimitive;

/// Returns each track point's fraction of the total along-track
/// distance, starting at `0.0` and ending at `1.0`.
///
/// Distance between consecutive points is great-circle distance.
pub fn track_fractions<T>(points: &[Point<T>]) -> Result<Vec<T>, ProfileError>
where
    T: CoordFloat + FromPrimitive,
{
    if points.is_empty() {
        return Err(ProfileError::Empty);
    }

    let mut total = T::zero();
    let mut cumulative = Vec::with_capacity(points.len());
    cumulative.push(total);
    for pair in points.windows(2) {
        total = total + pair[0].haversine_distance(&pair[1]);
        cumulative.push(total);
    }

    if points.len() == 1 {
        return Ok(cumulative);
    }
    if total <= T::zero() {
        return Err(ProfileError::ZeroLengthTrack);
    }
    Ok(cumulative.into_iter().map(|d| d / total).collect())
}
