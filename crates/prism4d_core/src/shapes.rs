//! Serializable shape templates
//!
//! ShapeTemplate stores the construction parameters of the solids the viewer
//! knows how to extrude. Every template builds a closed, indexed triangle
//! mesh centered at the origin with outward-facing winding, so adjacent
//! faces share vertex indices and the extruder can find shared edges.

use std::collections::HashMap;
use std::f32::consts::TAU;

use serde::{Serialize, Deserialize};

use crate::mesh::{Edge, Face, Mesh3D};
use crate::GeometryError;

/// Highest icosphere subdivision level (20 * 4^6 = 81920 faces)
pub const MAX_ICOSPHERE_DETAIL: u32 = 6;

/// Serializable shape template
///
/// Each variant stores the parameters needed to construct the mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// Axis-aligned cube
    Cube {
        /// Full side length
        size: f32,
    },
    /// Regular tetrahedron inscribed in a sphere
    Tetrahedron {
        radius: f32,
    },
    /// Regular octahedron with vertices on the axes
    Octahedron {
        radius: f32,
    },
    /// Sphere approximated by a subdivided icosahedron
    Icosphere {
        radius: f32,
        /// Number of 4-way subdivisions of each face
        #[serde(default)]
        detail: u32,
    },
    /// Capped cylinder along Y
    Cylinder {
        radius: f32,
        height: f32,
        segments: u32,
    },
    /// Ring around the Z axis
    Torus {
        /// Distance from the center to the middle of the tube
        radius: f32,
        /// Radius of the tube
        tube: f32,
        /// Segments around the tube cross-section
        radial_segments: u32,
        /// Segments around the ring
        tubular_segments: u32,
    },
}

impl Default for ShapeTemplate {
    fn default() -> Self {
        ShapeTemplate::Cube { size: 10.0 }
    }
}

impl ShapeTemplate {
    /// Named presets: `cube`, `tetra`, `octa`, `sphere`, `cylinder`, `ring`
    pub fn preset(name: &str) -> Option<Self> {
        let shape = match name {
            "cube" => ShapeTemplate::Cube { size: 10.0 },
            "tetra" => ShapeTemplate::Tetrahedron { radius: 8.0 },
            "octa" => ShapeTemplate::Octahedron { radius: 8.0 },
            "sphere" => ShapeTemplate::Icosphere { radius: 7.0, detail: 2 },
            "cylinder" => ShapeTemplate::Cylinder { radius: 5.0, height: 8.0, segments: 32 },
            "ring" => ShapeTemplate::Torus {
                radius: 8.0,
                tube: 3.0,
                radial_segments: 12,
                tubular_segments: 20,
            },
            _ => return None,
        };
        Some(shape)
    }

    /// Extrusion distance matching the shape's characteristic size
    pub fn default_distance(&self) -> f32 {
        match *self {
            ShapeTemplate::Cube { size } => size,
            ShapeTemplate::Tetrahedron { radius }
            | ShapeTemplate::Octahedron { radius }
            | ShapeTemplate::Icosphere { radius, .. }
            | ShapeTemplate::Torus { radius, .. } => radius,
            ShapeTemplate::Cylinder { height, .. } => height,
        }
    }

    /// Build the triangle mesh for this template
    pub fn create_mesh(&self) -> Result<Mesh3D, GeometryError> {
        match *self {
            ShapeTemplate::Cube { size } => Ok(cube(size)),
            ShapeTemplate::Tetrahedron { radius } => Ok(tetrahedron(radius)),
            ShapeTemplate::Octahedron { radius } => Ok(octahedron(radius)),
            ShapeTemplate::Icosphere { radius, detail } => {
                if detail > MAX_ICOSPHERE_DETAIL {
                    return Err(GeometryError::invalid_mesh(format!(
                        "icosphere detail must be at most {}, got {}",
                        MAX_ICOSPHERE_DETAIL, detail
                    )));
                }
                Ok(icosphere(radius, detail))
            }
            ShapeTemplate::Cylinder { radius, height, segments } => {
                require_segments("cylinder segments", segments)?;
                Ok(cylinder(radius, height, segments as usize))
            }
            ShapeTemplate::Torus { radius, tube, radial_segments, tubular_segments } => {
                require_segments("torus radial segments", radial_segments)?;
                require_segments("torus tubular segments", tubular_segments)?;
                Ok(torus(radius, tube, radial_segments as usize, tubular_segments as usize))
            }
        }
    }
}

fn require_segments(what: &str, count: u32) -> Result<(), GeometryError> {
    if count < 3 {
        return Err(GeometryError::invalid_mesh(format!("{} must be at least 3, got {}", what, count)));
    }
    Ok(())
}

fn faces(indices: &[[usize; 3]]) -> Vec<Face> {
    indices.iter().copied().map(Face::new).collect()
}

fn scaled(points: &[[f32; 3]], scale: f32) -> Vec<[f32; 3]> {
    points.iter().map(|p| p.map(|c| c * scale)).collect()
}

fn normalized(p: [f32; 3]) -> [f32; 3] {
    let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
    p.map(|c| c / len)
}

fn cube(size: f32) -> Mesh3D {
    let h = size * 0.5;

    // Vertex i has bit 0 -> x, bit 1 -> y, bit 2 -> z
    let vertices = (0..8)
        .map(|i| {
            let s = |bit: usize| if i & (1 << bit) != 0 { h } else { -h };
            [s(0), s(1), s(2)]
        })
        .collect();

    Mesh3D::new(
        vertices,
        faces(&[
            [0, 2, 1], [1, 2, 3], // -z
            [4, 5, 6], [5, 7, 6], // +z
            [0, 1, 4], [1, 5, 4], // -y
            [2, 6, 3], [3, 6, 7], // +y
            [0, 4, 2], [2, 4, 6], // -x
            [1, 3, 5], [3, 7, 5], // +x
        ]),
    )
}

fn tetrahedron(radius: f32) -> Mesh3D {
    let points = [
        [1.0, 1.0, 1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, -1.0],
        [1.0, -1.0, -1.0],
    ];
    Mesh3D::new(
        scaled(&points, radius / 3f32.sqrt()),
        faces(&[[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]]),
    )
}

fn octahedron(radius: f32) -> Mesh3D {
    let points = [
        [1.0, 0.0, 0.0],
        [-1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
    ];
    Mesh3D::new(
        scaled(&points, radius),
        faces(&[
            [0, 2, 4], [0, 4, 3], [0, 3, 5], [0, 5, 2],
            [1, 2, 5], [1, 5, 3], [1, 3, 4], [1, 4, 2],
        ]),
    )
}

fn icosphere(radius: f32, detail: u32) -> Mesh3D {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    let mut points: Vec<[f32; 3]> = [
        [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
        [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
        [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
    ]
    .into_iter()
    .map(normalized)
    .collect();

    let mut tris: Vec<[usize; 3]> = vec![
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];

    for _ in 0..detail {
        // Shared edges must map to the same midpoint vertex
        let mut midpoints: HashMap<Edge, usize> = HashMap::new();
        let mut midpoint = |a: usize, b: usize, points: &mut Vec<[f32; 3]>| {
            *midpoints.entry(Edge::new(a, b)).or_insert_with(|| {
                let (pa, pb) = (points[a], points[b]);
                points.push(normalized([pa[0] + pb[0], pa[1] + pb[1], pa[2] + pb[2]]));
                points.len() - 1
            })
        };

        let mut next = Vec::with_capacity(tris.len() * 4);
        for [a, b, c] in tris {
            let ab = midpoint(a, b, &mut points);
            let bc = midpoint(b, c, &mut points);
            let ca = midpoint(c, a, &mut points);
            next.extend([[a, ab, ca], [b, bc, ab], [c, ca, bc], [ab, bc, ca]]);
        }
        tris = next;
    }

    Mesh3D::new(scaled(&points, radius), faces(&tris))
}

fn cylinder(radius: f32, height: f32, segments: usize) -> Mesh3D {
    let half = height * 0.5;
    let ring = |y: f32| {
        (0..segments).map(move |i| {
            let theta = TAU * i as f32 / segments as f32;
            [radius * theta.sin(), y, radius * theta.cos()]
        })
    };

    // Bottom ring, top ring, bottom center, top center
    let mut vertices: Vec<[f32; 3]> = ring(-half).chain(ring(half)).collect();
    vertices.push([0.0, -half, 0.0]);
    vertices.push([0.0, half, 0.0]);
    let (bottom_center, top_center) = (2 * segments, 2 * segments + 1);

    let mut tris = Vec::with_capacity(4 * segments);
    for i in 0..segments {
        let j = (i + 1) % segments;
        let (bi, bj, ti, tj) = (i, j, segments + i, segments + j);
        tris.push([bi, bj, tj]);
        tris.push([bi, tj, ti]);
        tris.push([top_center, ti, tj]);
        tris.push([bottom_center, bj, bi]);
    }

    Mesh3D::new(vertices, faces(&tris))
}

fn torus(radius: f32, tube: f32, radial_segments: usize, tubular_segments: usize) -> Mesh3D {
    let mut vertices = Vec::with_capacity(radial_segments * tubular_segments);
    for j in 0..radial_segments {
        let v = TAU * j as f32 / radial_segments as f32;
        for i in 0..tubular_segments {
            let u = TAU * i as f32 / tubular_segments as f32;
            let r = radius + tube * v.cos();
            vertices.push([r * u.cos(), r * u.sin(), tube * v.sin()]);
        }
    }

    let index = |j: usize, i: usize| (j % radial_segments) * tubular_segments + (i % tubular_segments);
    let mut tris = Vec::with_capacity(2 * radial_segments * tubular_segments);
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = index(j, i);
            let b = index(j + 1, i);
            let c = index(j + 1, i + 1);
            let d = index(j, i + 1);
            tris.push([a, d, b]);
            tris.push([d, c, b]);
        }
    }

    Mesh3D::new(vertices, faces(&tris))
}
