use crate::{
    math::{interp, linspace},
    ProfileError,
};
use log::debug;
use num_traits::{Float, FromPrimitive};

/// Returns `n_points` elevations evenly spaced over the profile.
///
/// `positions`, when given, are each sample's fraction of the total
/// path length (`0.0` at the start, `1.0` at the end) and must be
/// non-decreasing. Without them samples are assumed evenly spaced.
/// Values in between samples are linearly interpolated.
pub fn resample<T>(
    elevations: &[T],
    n_points: usize,
    positions: Option<&[T]>,
) -> Result<Vec<T>, ProfileError>
where
    T: Float + FromPrimitive,
{
    if elevations.is_empty() {
        return Err(ProfileError::Empty);
    }

    let uniform;
    let positions = match positions {
        Some(positions) => {
            if positions.len() != elevations.len() {
                return Err(ProfileError::LengthMismatch {
                    elevations: elevations.len(),
                    positions: positions.len(),
                });
            }
            check_positions(positions)?;
            positions
        }
        None => {
            uniform = linspace(T::zero(), T::one(), elevations.len()).collect::<Vec<T>>();
            &uniform[..]
        }
    };

    let resampled = interp(linspace(T::zero(), T::one(), n_points), positions, elevations);
    debug!(
        "resample; in: {}, out: {}",
        elevations.len(),
        resampled.len()
    );
    Ok(resampled)
}

fn check_positions<T: Float>(positions: &[T]) -> Result<(), ProfileError> {
    let mut prev = T::neg_infinity();
    for (idx, &pos) in positions.iter().enumerate() {
        if !pos.is_finite() || pos < prev {
            return Err(ProfileError::Positions(idx));
        }
        prev = pos;
    }
    Ok(())
}
