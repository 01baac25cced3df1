use crate::{MeshError, Vector3, C};

/// One of the two horizontal axes a [`Feature`](crate::Feature) can
/// be laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
}

impl Axis {
    /// Returns the other horizontal axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Returns this axis' component of `v`.
    pub fn component(self, v: Vector3) -> C {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Returns a vector of `distance` along this axis, zero elsewhere.
    pub fn offset(self, distance: C) -> Vector3 {
        match self {
            Axis::X => Vector3::new(distance, 0.0, 0.0),
            Axis::Y => Vector3::new(0.0, distance, 0.0),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = MeshError;

    fn try_from(raw: usize) -> Result<Self, MeshError> {
        match raw {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            other => Err(MeshError::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for usize {
    fn from(axis: Axis) -> usize {
        axis as usize
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, MeshError, Vector3};

    #[test]
    fn test_try_from() {
        assert_eq!(Axis::try_from(0).unwrap(), Axis::X);
        assert_eq!(Axis::try_from(1).unwrap(), Axis::Y);
        for raw in [2, 3, usize::MAX] {
            assert!(matches!(
                Axis::try_from(raw),
                Err(MeshError::InvalidAxis(r)) if r == raw
            ));
        }
    }

    #[test]
    fn test_offset() {
        assert_eq!(Axis::X.offset(2.0), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(Axis::Y.offset(2.0), Vector3::new(0.0, 2.0, 0.0));
        assert_eq!(Axis::X.perpendicular(), Axis::Y);
        assert_eq!(Axis::Y.perpendicular().perpendicular(), Axis::Y);
    }
}
