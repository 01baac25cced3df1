use crate::{Cuboid, Feature, MeshError, C};
use log::debug;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Anything that can be added to a [`Solid`].
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Cuboid(Cuboid),
    Feature(Feature),
}

impl From<Cuboid> for Part {
    fn from(cuboid: Cuboid) -> Self {
        Part::Cuboid(cuboid)
    }
}

impl From<Feature> for Part {
    fn from(feature: Feature) -> Self {
        Part::Feature(feature)
    }
}

/// A collection of cuboids destined for one STL document.
///
/// Features are flattened on insertion; only their cuboids are kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Solid {
    /// Where [`Solid::save`] writes to.
    path: PathBuf,
    boxes: Vec<Cuboid>,
}

impl Solid {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            boxes: Vec::new(),
        }
    }

    /// Adds a single cuboid or all of a feature's cuboids.
    pub fn add<P: Into<Part>>(&mut self, part: P) {
        match part.into() {
            Part::Cuboid(cuboid) => self.boxes.push(cuboid),
            Part::Feature(feature) => self.boxes.extend(feature.into_boxes()),
        }
    }

    /// Adds every part in `parts`, in order.
    pub fn add_all<I, P>(&mut self, parts: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Part>,
    {
        for part in parts {
            self.add(part);
        }
    }

    /// Shifts every cuboid currently in the solid horizontally.
    ///
    /// Heights are left alone; this positions a finished model on the
    /// print bed.
    pub fn move_by(&mut self, dx: C, dy: C) {
        for cuboid in &mut self.boxes {
            cuboid.translate(dx, dy);
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn boxes(&self) -> &[Cuboid] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn facet_count(&self) -> usize {
        self.boxes.len() * 12
    }

    /// Writes `self` as an ASCII STL document to `out`.
    pub fn write<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        out.write_all(b"solid")?;
        for cuboid in &self.boxes {
            writeln!(out)?;
            for facet in cuboid.facets() {
                write!(out, "{facet}")?;
            }
            writeln!(out)?;
        }
        out.write_all(b"endsolid")
    }

    /// Returns `self` as an ASCII STL document.
    pub fn to_stl_string(&self) -> String {
        let mut buf = Vec::new();
        self.write(&mut buf)
            .expect("in-memory write should be infallible");
        String::from_utf8(buf).expect("STL output is ASCII")
    }

    /// Writes `self` to the file at [`Solid::path`].
    pub fn save(&self) -> Result<(), MeshError> {
        let now = std::time::Instant::now();
        let mut file = BufWriter::new(File::create(&self.path)?);
        self.write(&mut file)?;
        file.flush()?;
        debug!(
            "solid; path: {}, boxes: {}, facets: {}, write_exec: {:?}",
            self.path.display(),
            self.boxes.len(),
            self.facet_count(),
            now.elapsed()
        );
        Ok(())
    }
}
