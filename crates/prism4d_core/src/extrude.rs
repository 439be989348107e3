//! Extrusion of 3D meshes into 4D prisms
//!
//! The input mesh is copied twice: once at w = 0 (the near cap) and once at
//! w = distance (the far cap). In solid mode the two caps are joined by a
//! hull of quads, one per distinct edge, each split into two triangles. In
//! wireframe mode every vertex is joined to its far twin by a strut.
//!
//! For an input with `N` vertices, near vertex `i` lives at index `i` and
//! its far twin at `N + i`.

use std::collections::{HashMap, HashSet};

use prism4d_math::Vec4;

use crate::mesh::{dot3, Edge, Face, Mesh3D, Mesh4D, Segment, Topology};
use crate::GeometryError;

/// What kind of geometry the extruder emits
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtrudeMode {
    /// Triangles: both caps plus the hull
    #[default]
    Solid,
    /// Line segments: cap edges plus near-far struts
    Wireframe,
}

/// Extrusion parameters
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExtrudeOptions {
    /// W coordinate of the far cap; zero collapses both caps onto w = 0
    pub distance: f32,
    pub mode: ExtrudeMode,
    /// Wireframe only: drop edges whose two faces meet within this many degrees
    pub crease_angle: Option<f32>,
}

impl ExtrudeOptions {
    pub fn solid(distance: f32) -> Self {
        Self { distance, mode: ExtrudeMode::Solid, crease_angle: None }
    }

    pub fn wireframe(distance: f32) -> Self {
        Self { distance, mode: ExtrudeMode::Wireframe, crease_angle: None }
    }

    /// Keep only feature edges in wireframe output
    pub fn with_crease_angle(mut self, degrees: f32) -> Self {
        self.crease_angle = Some(degrees);
        self
    }
}

/// Extrude `mesh` by `distance` along W
///
/// Solid meshes get both caps plus a triangulated hull; wireframe meshes get
/// the cap edges plus one strut per vertex.
pub fn extrude(mesh: &Mesh3D, distance: f32, wireframe: bool) -> Result<Mesh4D, GeometryError> {
    let options = if wireframe {
        ExtrudeOptions::wireframe(distance)
    } else {
        ExtrudeOptions::solid(distance)
    };
    extrude_with(mesh, &options)
}

/// Extrude `mesh` using explicit options
pub fn extrude_with(mesh: &Mesh3D, options: &ExtrudeOptions) -> Result<Mesh4D, GeometryError> {
    mesh.validate(options.mode == ExtrudeMode::Solid)?;

    let n = mesh.vertex_count();
    let vertices = lift(mesh, options.distance);

    let topology = match options.mode {
        ExtrudeMode::Solid => Topology::Faces(solid_faces(&mesh.faces, n)),
        ExtrudeMode::Wireframe => {
            let edges = match options.crease_angle {
                Some(degrees) => feature_edges(mesh, degrees),
                None => unique_edges(&mesh.faces),
            };
            Topology::Segments(wireframe_segments(&edges, n))
        }
    };

    log::debug!(
        "Extruded {} vertices / {} faces by {} ({:?}): {} vertices, {} {}",
        n,
        mesh.face_count(),
        options.distance,
        options.mode,
        vertices.len(),
        topology.len(),
        if matches!(topology, Topology::Faces(_)) { "faces" } else { "segments" },
    );

    Mesh4D::new(vertices, topology)
}

/// Near cap at w = 0 followed by far cap at w = distance
fn lift(mesh: &Mesh3D, distance: f32) -> Vec<Vec4> {
    let near = mesh.vertices.iter().map(|&p| Vec4::from_xyz(p, 0.0));
    let far = mesh.vertices.iter().map(|&p| Vec4::from_xyz(p, distance));
    near.chain(far).collect()
}

/// Distinct undirected edges, each in the direction it was first seen
fn unique_edges(faces: &[Face]) -> Vec<[usize; 2]> {
    let mut seen = HashSet::with_capacity(faces.len() * 3 / 2);
    let mut edges = Vec::with_capacity(faces.len() * 3 / 2);

    for face in faces {
        for [a, b] in face.directed_edges() {
            if seen.insert(Edge::new(a, b)) {
                edges.push([a, b]);
            } else {
                log::trace!("Skipping shared edge {}-{}", a, b);
            }
        }
    }

    edges
}

/// Edges on a crease sharper than `degrees`, plus boundary edges
///
/// An edge is compared using the first two faces that contain it.
fn feature_edges(mesh: &Mesh3D, degrees: f32) -> Vec<[usize; 2]> {
    let threshold = degrees.to_radians().cos();

    // Edge -> (first-seen direction, adjacent faces), in discovery order
    let mut slots: HashMap<Edge, usize> = HashMap::new();
    let mut adjacency: Vec<([usize; 2], Vec<usize>)> = Vec::new();

    for (fi, face) in mesh.faces.iter().enumerate() {
        for [a, b] in face.directed_edges() {
            let slot = *slots.entry(Edge::new(a, b)).or_insert_with(|| {
                adjacency.push(([a, b], Vec::new()));
                adjacency.len() - 1
            });
            adjacency[slot].1.push(fi);
        }
    }

    adjacency
        .into_iter()
        .filter(|(_, faces)| match faces.as_slice() {
            [f0, f1, ..] => match (
                mesh.face_normal(&mesh.faces[*f0]),
                mesh.face_normal(&mesh.faces[*f1]),
            ) {
                (Some(n0), Some(n1)) => dot3(n0, n1) <= threshold,
                _ => true,
            },
            _ => true,
        })
        .map(|(edge, _)| edge)
        .collect()
}

/// Near cap, far cap, then two hull triangles per edge
fn solid_faces(faces: &[Face], n: usize) -> Vec<Face> {
    let edges = unique_edges(faces);

    let mut out = Vec::with_capacity(faces.len() * 2 + edges.len() * 2);
    out.extend_from_slice(faces);
    out.extend(faces.iter().map(|f| f.offset(n)));

    for [a, b] in edges {
        out.push(Face::new([a, b, a + n]));
        out.push(Face::new([b, b + n, a + n]));
    }

    out
}

/// Near edges, far edges, then one strut per vertex
fn wireframe_segments(edges: &[[usize; 2]], n: usize) -> Vec<Segment> {
    let near = edges.iter().map(|&[a, b]| Segment::new(a, b));
    let far = edges.iter().map(|&[a, b]| Segment::new(a + n, b + n));
    let struts = (0..n).map(|i| Segment::new(i, i + n));
    near.chain(far).chain(struts).collect()
}
