use crate::C;
use std::{
    fmt,
    ops::{Add, Sub},
};

/// A point or offset in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: C,
    pub y: C,
    pub z: C,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Returns a vector from individual components.
    pub const fn new(x: C, y: C, z: C) -> Self {
        Self { x, y, z }
    }

    /// Returns a vector from an `[x, y, z]` triple.
    pub const fn from_triple([x, y, z]: [C; 3]) -> Self {
        Self { x, y, z }
    }

    /// Returns the component-wise sum of `self` and `other`.
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length.
    pub fn norm(self) -> C {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn to_triple(self) -> [C; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vector3::add(self, rhs)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl From<[C; 3]> for Vector3 {
    fn from(triple: [C; 3]) -> Self {
        Self::from_triple(triple)
    }
}

impl From<(C, C, C)> for Vector3 {
    fn from((x, y, z): (C, C, C)) -> Self {
        Self::new(x, y, z)
    }
}

/// Formats as `x y z` with six decimals, the STL number format.
impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6} {:.6} {:.6}", self.x, self.y, self.z)
    }
}
