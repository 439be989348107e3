//! Mesh types
//!
//! A [`Mesh3D`] is the triangle mesh handed to the extruder. A [`Mesh4D`] is
//! what comes out: 4D vertices plus either triangles or line segments.
//! Vertices are identified by their position in the vertex list, so nothing
//! here ever reorders or removes a vertex.

use std::collections::HashSet;

use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use prism4d_math::Vec4;

use crate::GeometryError;

bitflags! {
    /// Flags telling a renderer which parts of a mesh changed since it last looked
    ///
    /// Normals and projected positions are derived from the 4D vertices, so
    /// anything cached from them is stale once `POSITIONS` is set.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct DirtyFlags: u8 {
        /// No changes
        const NONE = 0;
        /// Vertex coordinates have changed
        const POSITIONS = 1 << 0;
        /// Faces or segments have changed
        const TOPOLOGY = 1 << 1;
        /// Freshly built mesh - upload everything
        const ALL = Self::POSITIONS.bits() | Self::TOPOLOGY.bits();
    }
}

/// A triangle defined by three vertex indices
///
/// Index order is winding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Face {
    pub indices: [usize; 3],
}

impl Face {
    #[inline]
    pub const fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// The three directed edges a→b, b→c, c→a
    #[inline]
    pub fn directed_edges(&self) -> [[usize; 2]; 3] {
        let [a, b, c] = self.indices;
        [[a, b], [b, c], [c, a]]
    }

    /// The same face with every index shifted by `n`
    #[inline]
    pub fn offset(&self, n: usize) -> Self {
        let [a, b, c] = self.indices;
        Self::new([a + n, b + n, c + n])
    }
}

/// An undirected edge between two vertices
///
/// Stored in canonical (min, max) order so that `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    lo: usize,
    hi: usize,
}

impl Edge {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { lo: a.min(b), hi: a.max(b) }
    }

    /// Indices in canonical order
    #[inline]
    pub fn indices(&self) -> [usize; 2] {
        [self.lo, self.hi]
    }
}

/// A line segment between two vertices (wireframe output)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Segment {
    pub indices: [usize; 2],
}

impl Segment {
    #[inline]
    pub const fn new(a: usize, b: usize) -> Self {
        Self { indices: [a, b] }
    }
}

/// A 3D triangle mesh
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh3D {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<Face>,
}

impl Mesh3D {
    pub fn new(vertices: Vec<[f32; 3]>, faces: Vec<Face>) -> Self {
        Self { vertices, faces }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that the mesh can be extruded
    ///
    /// Fails if there are no vertices, if faces are required and there are
    /// none, or if any face points past the end of the vertex list.
    pub fn validate(&self, require_faces: bool) -> Result<(), GeometryError> {
        if self.vertices.is_empty() {
            return Err(GeometryError::invalid_mesh("mesh has no vertices"));
        }
        if require_faces && self.faces.is_empty() {
            return Err(GeometryError::invalid_mesh("mesh has no faces"));
        }

        let n = self.vertices.len();
        for (i, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.indices.iter().find(|&&idx| idx >= n) {
                return Err(GeometryError::invalid_mesh(format!(
                    "face {} references vertex {} but the mesh has {} vertices",
                    i, bad, n
                )));
            }
        }

        Ok(())
    }

    /// Number of distinct undirected edges
    pub fn distinct_edge_count(&self) -> usize {
        self.faces
            .iter()
            .flat_map(|f| f.directed_edges())
            .map(|[a, b]| Edge::new(a, b))
            .collect::<HashSet<_>>()
            .len()
    }

    /// Unit normal of a face from its winding, or zero for a degenerate face
    ///
    /// Returns `None` if the face refers to a vertex this mesh does not have.
    pub fn face_normal(&self, face: &Face) -> Option<[f32; 3]> {
        let [a, b, c] = [
            *self.vertices.get(face.indices[0])?,
            *self.vertices.get(face.indices[1])?,
            *self.vertices.get(face.indices[2])?,
        ];
        let u = sub3(b, a);
        let v = sub3(c, a);
        let n = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        let len = dot3(n, n).sqrt();
        if len > 0.0 {
            Some(n.map(|c| c / len))
        } else {
            Some([0.0; 3])
        }
    }
}

#[inline]
fn sub3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub(crate) fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Connectivity of a [`Mesh4D`]
#[derive(Clone, Debug, PartialEq)]
pub enum Topology {
    /// Solid output: triangles
    Faces(Vec<Face>),
    /// Wireframe output: line segments
    Segments(Vec<Segment>),
}

impl Topology {
    /// Largest vertex index referenced, if any
    pub fn max_index(&self) -> Option<usize> {
        match self {
            Topology::Faces(faces) => faces.iter().flat_map(|f| f.indices).max(),
            Topology::Segments(segments) => segments.iter().flat_map(|s| s.indices).max(),
        }
    }

    /// Number of faces or segments
    pub fn len(&self) -> usize {
        match self {
            Topology::Faces(faces) => faces.len(),
            Topology::Segments(segments) => segments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A 4D mesh: vertices with four coordinates plus faces or segments
///
/// Extruded meshes hold `2N` vertices for an `N`-vertex input: the near cap
/// (w = 0) first, then the far cap in the same order.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh4D {
    pub(crate) vertices: Vec<Vec4>,
    pub(crate) topology: Topology,
    pub(crate) dirty: DirtyFlags,
}

impl Mesh4D {
    /// Create a mesh, checking that every index refers to an existing vertex
    pub fn new(vertices: Vec<Vec4>, topology: Topology) -> Result<Self, GeometryError> {
        if let Some(max) = topology.max_index() {
            if max >= vertices.len() {
                return Err(GeometryError::invalid_mesh(format!(
                    "index {} out of range for {} vertices",
                    max,
                    vertices.len()
                )));
            }
        }

        Ok(Self {
            vertices,
            topology,
            dirty: DirtyFlags::ALL,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Triangles, or `None` for a wireframe mesh
    pub fn faces(&self) -> Option<&[Face]> {
        match &self.topology {
            Topology::Faces(faces) => Some(faces),
            Topology::Segments(_) => None,
        }
    }

    /// Line segments, or `None` for a solid mesh
    pub fn segments(&self) -> Option<&[Segment]> {
        match &self.topology {
            Topology::Segments(segments) => Some(segments),
            Topology::Faces(_) => None,
        }
    }

    #[inline]
    pub fn is_wireframe(&self) -> bool {
        matches!(self.topology, Topology::Segments(_))
    }

    /// First three coordinates of every vertex, for an external projection step
    pub fn positions_xyz(&self) -> Vec<[f32; 3]> {
        self.vertices.iter().map(Vec4::xyz).collect()
    }

    /// Raw vertex data, 16 bytes per vertex, for GPU upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Changes not yet seen by the renderer
    #[inline]
    pub fn dirty(&self) -> DirtyFlags {
        self.dirty
    }

    /// Read and clear the dirty flags
    pub fn take_dirty(&mut self) -> DirtyFlags {
        std::mem::take(&mut self.dirty)
    }
}
