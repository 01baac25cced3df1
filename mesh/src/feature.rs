use crate::{Axis, Cuboid, MeshError, Vector3, C};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A contiguous run of bars laid out along one horizontal axis.
///
/// Every bar shares the same `thickness` on the perpendicular axis.
/// Bar `i` is `lengths[i]` long along `along`, `heights[i]` tall, and
/// starts exactly where bar `i - 1` ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Minimum corner of the first bar.
    origin: Vector3,

    /// Axis the bars are chained along.
    along: Axis,

    /// Extent of every bar on the perpendicular axis.
    thickness: C,

    lengths: Vec<C>,

    heights: Vec<C>,

    /// One bar per (length, height) pair, in input order.
    boxes: Vec<Cuboid>,
}

impl Feature {
    pub fn builder() -> FeatureBuilder {
        FeatureBuilder {
            origin: Vector3::ZERO,
            along: None,
            thickness: None,
            lengths: None,
            heights: None,
        }
    }

    /// Returns `n` copies of `self`, copy `i` (counting from 1) shifted
    /// by `i * spacing` along the perpendicular axis.
    pub fn duplicate_n_times(&self, n: usize, spacing: C) -> Vec<Feature> {
        let perpendicular = self.along.perpendicular();
        let copy = |i: usize| {
            // Index fits comfortably in an f64 mantissa.
            #[allow(clippy::cast_precision_loss)]
            let origin = self.origin + perpendicular.offset(i as C * spacing);
            Feature {
                origin,
                along: self.along,
                thickness: self.thickness,
                lengths: self.lengths.clone(),
                heights: self.heights.clone(),
                boxes: build_boxes(
                    origin,
                    self.along,
                    self.thickness,
                    &self.lengths,
                    &self.heights,
                ),
            }
        };

        #[cfg(feature = "parallel")]
        let copies = (1..=n).into_par_iter().map(copy).collect();
        #[cfg(not(feature = "parallel"))]
        let copies = (1..=n).map(copy).collect();

        copies
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn along(&self) -> Axis {
        self.along
    }

    pub fn thickness(&self) -> C {
        self.thickness
    }

    pub fn lengths(&self) -> &[C] {
        &self.lengths
    }

    pub fn heights(&self) -> &[C] {
        &self.heights
    }

    pub fn boxes(&self) -> &[Cuboid] {
        &self.boxes
    }

    /// Consumes `self`, returning its bars.
    pub fn into_boxes(self) -> Vec<Cuboid> {
        self.boxes
    }
}

pub struct FeatureBuilder {
    /// Minimum corner of the first bar (defaults to the origin).
    origin: Vector3,

    /// Layout axis (required).
    along: Option<Axis>,

    /// Bar extent on the perpendicular axis (required).
    thickness: Option<C>,

    /// Bar lengths along `along` (required).
    lengths: Option<Vec<C>>,

    /// Bar heights (required).
    heights: Option<Vec<C>>,
}

impl FeatureBuilder {
    /// Minimum corner of the first bar (defaults to the origin).
    #[must_use]
    pub fn origin(mut self, origin: Vector3) -> Self {
        self.origin = origin;
        self
    }

    /// Layout axis (required).
    #[must_use]
    pub fn along(mut self, axis: Axis) -> Self {
        self.along = Some(axis);
        self
    }

    /// Bar extent on the perpendicular axis (required).
    #[must_use]
    pub fn thickness(mut self, thickness: C) -> Self {
        self.thickness = Some(thickness);
        self
    }

    /// Bar lengths along the layout axis (required).
    #[must_use]
    pub fn lengths(mut self, lengths: Vec<C>) -> Self {
        self.lengths = Some(lengths);
        self
    }

    /// Bar heights (required, one per length).
    #[must_use]
    pub fn heights(mut self, heights: Vec<C>) -> Self {
        self.heights = Some(heights);
        self
    }

    pub fn build(self) -> Result<Feature, MeshError> {
        let along = self.along.ok_or(MeshError::Builder("along"))?;
        let thickness = self.thickness.ok_or(MeshError::Builder("thickness"))?;
        let lengths = self.lengths.ok_or(MeshError::Builder("lengths"))?;
        let heights = self.heights.ok_or(MeshError::Builder("heights"))?;

        if lengths.len() != heights.len() {
            return Err(MeshError::LengthMismatch {
                lengths: lengths.len(),
                heights: heights.len(),
            });
        }
        check_dimension("thickness", 0, thickness)?;
        for (index, (&length, &height)) in lengths.iter().zip(heights.iter()).enumerate() {
            check_dimension("length", index, length)?;
            check_dimension("height", index, height)?;
        }

        let now = std::time::Instant::now();
        let boxes = build_boxes(self.origin, along, thickness, &lengths, &heights);
        debug!(
            "feature; along: {:?}, boxes: {}, build_exec: {:?}",
            along,
            boxes.len(),
            now.elapsed()
        );

        Ok(Feature {
            origin: self.origin,
            along,
            thickness,
            lengths,
            heights,
            boxes,
        })
    }
}

fn check_dimension(name: &'static str, index: usize, value: C) -> Result<(), MeshError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidDimension { name, index, value })
    }
}

/// Returns the diagonal of a bar: `length` along `along`, `thickness`
/// across it, `height` up.
fn bar_diagonal(along: Axis, thickness: C, length: C, height: C) -> Vector3 {
    match along {
        Axis::X => Vector3::new(length, thickness, height),
        Axis::Y => Vector3::new(thickness, length, height),
    }
}

/// Chains bars along `along`, each one the neighbor of the last.
fn build_boxes(
    origin: Vector3,
    along: Axis,
    thickness: C,
    lengths: &[C],
    heights: &[C],
) -> Vec<Cuboid> {
    let mut boxes: Vec<Cuboid> = Vec::with_capacity(lengths.len());
    for (&length, &height) in lengths.iter().zip(heights) {
        let diagonal = bar_diagonal(along, thickness, length, height);
        let next = match boxes.last() {
            None => Cuboid::new(origin, diagonal),
            Some(last) => last.get_neighbor(diagonal, along),
        };
        boxes.push(next);
    }
    boxes
}
