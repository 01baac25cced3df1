use crate::{Axis, Facet, Vector3, C};

/// An axis-aligned rectangular prism.
///
/// Defined by an `origin` corner and a `diagonal` reaching the
/// opposite corner. With a non-negative diagonal, `origin` is the
/// minimum corner on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    origin: Vector3,
    diagonal: Vector3,
}

impl Cuboid {
    pub fn new(origin: Vector3, diagonal: Vector3) -> Self {
        Self { origin, diagonal }
    }

    /// Returns a cuboid with extent `diagonal` that touches the far
    /// face of `self` along `axis`.
    #[must_use]
    pub fn get_neighbor(&self, diagonal: Vector3, axis: Axis) -> Self {
        let origin = self.origin + axis.offset(axis.component(self.diagonal));
        Self { origin, diagonal }
    }

    /// Returns a cuboid of the same size placed at `new_origin`.
    #[must_use]
    pub fn copy_to(&self, new_origin: Vector3) -> Self {
        Self {
            origin: new_origin,
            diagonal: self.diagonal,
        }
    }

    /// Shifts `self` horizontally.
    pub fn translate(&mut self, dx: C, dy: C) {
        self.origin = self.origin + Vector3::new(dx, dy, 0.0);
    }

    pub fn origin(&self) -> Vector3 {
        self.origin
    }

    pub fn diagonal(&self) -> Vector3 {
        self.diagonal
    }

    pub fn min(&self) -> Vector3 {
        self.origin
    }

    pub fn max(&self) -> Vector3 {
        self.origin + self.diagonal
    }

    pub fn x_min(&self) -> C {
        self.min().x
    }

    pub fn y_min(&self) -> C {
        self.min().y
    }

    pub fn z_min(&self) -> C {
        self.min().z
    }

    pub fn x_max(&self) -> C {
        self.max().x
    }

    pub fn y_max(&self) -> C {
        self.max().y
    }

    pub fn z_max(&self) -> C {
        self.max().z
    }

    /// Returns the twelve facets covering this cuboid's six faces.
    ///
    /// Faces come in the order top, front (-y), left (-x), bottom,
    /// right (+x), back (+y), two triangles each. Winding follows the
    /// right hand rule around the outward normal. Slicers compare the
    /// two, so this order is part of the output format.
    pub fn facets(&self) -> [Facet; 12] {
        let Vector3 {
            x: x0,
            y: y0,
            z: z0,
        } = self.min();
        let Vector3 {
            x: x1,
            y: y1,
            z: z1,
        } = self.max();
        let v = Vector3::new;

        let up = v(0.0, 0.0, 1.0);
        let down = v(0.0, 0.0, -1.0);
        let front = v(0.0, -1.0, 0.0);
        let back = v(0.0, 1.0, 0.0);
        let left = v(-1.0, 0.0, 0.0);
        let right = v(1.0, 0.0, 0.0);

        [
            Facet::new(up, [v(x0, y0, z1), v(x1, y1, z1), v(x0, y1, z1)]),
            Facet::new(up, [v(x1, y1, z1), v(x0, y0, z1), v(x1, y0, z1)]),
            Facet::new(front, [v(x1, y0, z0), v(x1, y0, z1), v(x0, y0, z1)]),
            Facet::new(front, [v(x1, y0, z0), v(x0, y0, z1), v(x0, y0, z0)]),
            Facet::new(left, [v(x0, y0, z0), v(x0, y0, z1), v(x0, y1, z1)]),
            Facet::new(left, [v(x0, y0, z0), v(x0, y1, z1), v(x0, y1, z0)]),
            Facet::new(down, [v(x0, y1, z0), v(x1, y1, z0), v(x1, y0, z0)]),
            Facet::new(down, [v(x0, y1, z0), v(x1, y0, z0), v(x0, y0, z0)]),
            Facet::new(right, [v(x1, y1, z0), v(x1, y1, z1), v(x1, y0, z1)]),
            Facet::new(right, [v(x1, y1, z0), v(x1, y0, z1), v(x1, y0, z0)]),
            Facet::new(back, [v(x0, y1, z0), v(x0, y1, z1), v(x1, y1, z1)]),
            Facet::new(back, [v(x0, y1, z0), v(x1, y1, z1), v(x1, y1, z0)]),
        ]
    }
}
