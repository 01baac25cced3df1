//! # Bar meshes
//!
//! `mesh` builds solids out of axis-aligned cuboids and serializes them
//! as ASCII STL. The intended use is turning a one-dimensional
//! elevation profile into a row of vertical bars, one bar per sample,
//! that can be sent straight to a slicer.
//!
//! ```
//! use mesh::{Axis, Feature, Solid};
//!
//! let hills = Feature::builder()
//!     .along(Axis::X)
//!     .thickness(30.0)
//!     .lengths(vec![5.0, 5.0])
//!     .heights(vec![10.0, 20.0])
//!     .build()?;
//! let mut solid = Solid::new("hills.stl");
//! solid.add(hills);
//! let stl = solid.to_stl_string();
//! assert!(stl.starts_with("solid\n"));
//! assert!(stl.ends_with("endsolid"));
//! # Ok::<(), mesh::MeshError>(())
//! ```

mod axis;
mod cuboid;
mod error;
mod facet;
mod feature;
mod solid;
mod vector;

pub use crate::{
    axis::Axis,
    cuboid::Cuboid,
    error::MeshError,
    facet::Facet,
    feature::{Feature, FeatureBuilder},
    solid::{Part, Solid},
    vector::Vector3,
};

/// Base floating point type used for all coordinates.
///
/// STL text output is printed with six decimals, so `f64` buys nothing
/// visible in the output, but it keeps long chains of bars free of
/// accumulated rounding when positions are derived by repeated
/// addition.
pub type C = f64;
