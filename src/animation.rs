//! Continuous spin through a fixed set of rotation planes
//!
//! Every step rotates the mesh by the same small angle in each enabled
//! plane, in order. The per-plane rotations are folded into one matrix so
//! the vertices are touched once per step.

use prism4d_core::{Mesh4D, RotationPlane};
use prism4d_math::mat5::{self, Mat5};

/// Radians per step for each unit of speed
pub const RADIANS_PER_SPEED_UNIT: f32 = 1.0 / 200.0;

/// A constant-speed spin in one or more planes
#[derive(Clone, Debug, PartialEq)]
pub struct Spin {
    planes: Vec<RotationPlane>,
    speed: f32,
}

impl Spin {
    pub fn new(planes: Vec<RotationPlane>, speed: f32) -> Self {
        Self { planes, speed }
    }

    pub fn planes(&self) -> &[RotationPlane] {
        &self.planes
    }

    /// Angle applied in each plane per step
    pub fn angle_per_step(&self) -> f32 {
        self.speed * RADIANS_PER_SPEED_UNIT
    }

    /// Turn a plane on or off, keeping the order planes were enabled in
    pub fn toggle(&mut self, plane: RotationPlane) {
        if let Some(pos) = self.planes.iter().position(|&p| p == plane) {
            self.planes.remove(pos);
        } else {
            self.planes.push(plane);
        }
    }

    /// One step's rotations composed into a single matrix
    pub fn step_matrix(&self) -> Mat5 {
        let theta = self.angle_per_step();
        self.planes
            .iter()
            .fold(mat5::IDENTITY, |acc, plane| mat5::mul(plane.matrix(theta), acc))
    }

    /// Whether a step would leave the mesh where it is
    pub fn is_idle(&self) -> bool {
        self.planes.is_empty() || self.speed == 0.0
    }

    /// Advance `mesh` by one step
    pub fn step(&self, mesh: &mut Mesh4D) {
        if self.is_idle() {
            return;
        }
        mesh.apply_matrix(self.step_matrix());
    }

    /// Advance `mesh` by `steps` steps
    pub fn run(&self, mesh: &mut Mesh4D, steps: u32) {
        if self.is_idle() {
            return;
        }
        let m = self.step_matrix();
        for _ in 0..steps {
            mesh.apply_matrix(m);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism4d_core::{extrude, rotate, DirtyFlags, Face, Mesh3D, Vec4};

    const EPSILON: f32 = 0.0001;

    fn prism() -> Mesh4D {
        let tri = Mesh3D::new(
            vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            vec![Face::new([0, 1, 2])],
        );
        extrude(&tri, 2.0, false).unwrap()
    }

    fn assert_close(a: &[Vec4], b: &[Vec4]) {
        for (va, vb) in a.iter().zip(b) {
            assert!(va.max_abs_diff(*vb) < EPSILON, "{:?} vs {:?}", va, vb);
        }
    }

    #[test]
    fn test_angle_per_step() {
        let spin = Spin::new(vec![RotationPlane::XW], 3.0);
        assert!((spin.angle_per_step() - 0.015).abs() < 1e-6);
    }

    #[test]
    fn test_step_matches_sequential_rotations() {
        let spin = Spin::new(vec![RotationPlane::XW, RotationPlane::YW, RotationPlane::XZ], 40.0);
        let theta = spin.angle_per_step();

        let mut stepped = prism();
        spin.step(&mut stepped);

        let expected = [RotationPlane::XW, RotationPlane::YW, RotationPlane::XZ]
            .iter()
            .fold(prism(), |mesh, &plane| rotate(plane, &mesh, theta));

        assert_close(stepped.vertices(), expected.vertices());
    }

    #[test]
    fn test_run_equals_repeated_steps() {
        let spin = Spin::new(vec![RotationPlane::ZW], 10.0);
        let mut a = prism();
        let mut b = prism();
        spin.run(&mut a, 5);
        for _ in 0..5 {
            spin.step(&mut b);
        }
        assert_close(a.vertices(), b.vertices());
    }

    #[test]
    fn test_idle_spin_leaves_mesh_clean() {
        let mut mesh = prism();
        mesh.take_dirty();
        Spin::new(Vec::new(), 3.0).step(&mut mesh);
        Spin::new(vec![RotationPlane::XW], 0.0).step(&mut mesh);
        assert_eq!(mesh.dirty(), DirtyFlags::NONE);
        assert_eq!(mesh.vertices(), prism().vertices());
    }

    #[test]
    fn test_idle_run_leaves_mesh_clean() {
        let mut mesh = prism();
        mesh.take_dirty();
        Spin::new(Vec::new(), 3.0).run(&mut mesh, 3);
        Spin::new(vec![RotationPlane::YW], 0.0).run(&mut mesh, 3);
        assert_eq!(mesh.dirty(), DirtyFlags::NONE);

        Spin::new(vec![RotationPlane::YW], 1.0).run(&mut mesh, 3);
        assert_eq!(mesh.dirty(), DirtyFlags::POSITIONS);
    }

    #[test]
    fn test_toggle() {
        let mut spin = Spin::new(vec![RotationPlane::XW], 1.0);
        spin.toggle(RotationPlane::ZW);
        spin.toggle(RotationPlane::XW);
        assert_eq!(spin.planes(), &[RotationPlane::ZW]);
    }
}
