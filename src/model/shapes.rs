//! Procedural geometry for the primitive shapes the scene is built from.
//!
//! Every generator produces unit-sized geometry; placements scale it into
//! place. Texture coordinates use a bottom-left origin, which matches the
//! vertically flipped texture upload in [`super::texture`].

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::ModelVertex;

const SPHERE_STACKS: u32 = 18;
const SPHERE_SLICES: u32 = 36;
const ROUND_SIDES: u32 = 36;
const TORUS_RING_SEGMENTS: u32 = 48;
const TORUS_TUBE_SEGMENTS: u32 = 16;
pub const TORUS_MAIN_RADIUS: f32 = 1.0;
pub const TORUS_TUBE_RADIUS: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    /// 2x2 quad in the XZ plane facing +Y.
    Plane,
    /// Unit cube centred on the origin.
    Box,
    /// Radius 1, centred on the origin.
    Sphere,
    /// Radius 1, base at y = 0, top at y = 1.
    Cylinder,
    /// Square base of side 1 at y = -0.5, apex at y = 0.5.
    Pyramid,
    /// Radius 1 base at y = 0, apex at y = 1.
    Cone,
    /// Ring of radius 1 around the Z axis.
    Torus,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::Plane,
        Shape::Box,
        Shape::Sphere,
        Shape::Cylinder,
        Shape::Pyramid,
        Shape::Cone,
        Shape::Torus,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Shape::Plane => "plane",
            Shape::Box => "box",
            Shape::Sphere => "sphere",
            Shape::Cylinder => "cylinder",
            Shape::Pyramid => "pyramid",
            Shape::Cone => "cone",
            Shape::Torus => "torus",
        }
    }

    pub fn generate(self) -> MeshData {
        match self {
            Shape::Plane => plane(),
            Shape::Box => cube(),
            Shape::Sphere => sphere(),
            Shape::Cylinder => cylinder(),
            Shape::Pyramid => pyramid(),
            Shape::Cone => cone(),
            Shape::Torus => torus(),
        }
    }
}

/// CPU-side geometry, uploaded once per shape.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push_vertex(&mut self, position: Vec3, tex_coords: [f32; 2], normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(ModelVertex::new(
            position.to_array(),
            tex_coords,
            normal.normalize_or_zero().to_array(),
        ));
        index
    }

    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.indices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    /// Flat-shaded polygon; `corners` are counter-clockwise seen from the front.
    fn push_face(&mut self, corners: &[(Vec3, [f32; 2])]) {
        let normal = (corners[1].0 - corners[0].0).cross(corners[2].0 - corners[0].0);
        let first = self.vertices.len() as u32;
        for (position, uv) in corners {
            self.push_vertex(*position, *uv, normal);
        }
        for i in 1..(corners.len() as u32 - 1) {
            self.indices.extend_from_slice(&[first, first + i, first + i + 1]);
        }
    }

    /// Grid of `(rows + 1) * (columns + 1)` vertices stitched into quads.
    fn push_grid(&mut self, rows: u32, columns: u32, mut vertex: impl FnMut(f32, f32) -> (Vec3, Vec3)) {
        let first = self.vertices.len() as u32;
        for row in 0..=rows {
            let v = row as f32 / rows as f32;
            for column in 0..=columns {
                let u = column as f32 / columns as f32;
                let (position, normal) = vertex(u, v);
                self.push_vertex(position, [u, v], normal);
            }
        }
        let stride = columns + 1;
        for row in 0..rows {
            for column in 0..columns {
                let a = first + row * stride + column;
                let b = a + stride;
                self.push_quad(a, a + 1, b + 1, b);
            }
        }
    }

    /// Disc of radius 1 at height `y`, facing `+Y` when `up`.
    fn push_disc(&mut self, y: f32, up: bool) {
        let normal = if up { Vec3::Y } else { Vec3::NEG_Y };
        let centre = self.push_vertex(Vec3::new(0.0, y, 0.0), [0.5, 0.5], normal);
        let rim = self.vertices.len() as u32;
        for side in 0..=ROUND_SIDES {
            let theta = TAU * side as f32 / ROUND_SIDES as f32;
            let (sin, cos) = theta.sin_cos();
            self.push_vertex(
                Vec3::new(cos, y, sin),
                [0.5 + 0.5 * cos, 0.5 + 0.5 * sin],
                normal,
            );
        }
        for side in 0..ROUND_SIDES {
            let (a, b) = (rim + side, rim + side + 1);
            if up {
                self.indices.extend_from_slice(&[centre, b, a]);
            } else {
                self.indices.extend_from_slice(&[centre, a, b]);
            }
        }
    }
}

fn plane() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_face(&[
        (Vec3::new(-1.0, 0.0, 1.0), [0.0, 0.0]),
        (Vec3::new(1.0, 0.0, 1.0), [1.0, 0.0]),
        (Vec3::new(1.0, 0.0, -1.0), [1.0, 1.0]),
        (Vec3::new(-1.0, 0.0, -1.0), [0.0, 1.0]),
    ]);
    mesh
}

fn cube() -> MeshData {
    let mut mesh = MeshData::default();
    let uv = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    // Each face: origin corner plus the two in-plane axes, wound CCW from outside.
    let faces = [
        (Vec3::new(-0.5, -0.5, 0.5), Vec3::X, Vec3::Y),
        (Vec3::new(0.5, -0.5, -0.5), Vec3::NEG_X, Vec3::Y),
        (Vec3::new(0.5, -0.5, 0.5), Vec3::NEG_Z, Vec3::Y),
        (Vec3::new(-0.5, -0.5, -0.5), Vec3::Z, Vec3::Y),
        (Vec3::new(-0.5, 0.5, 0.5), Vec3::X, Vec3::NEG_Z),
        (Vec3::new(-0.5, -0.5, -0.5), Vec3::X, Vec3::Z),
    ];
    for (origin, u_axis, v_axis) in faces {
        mesh.push_face(&[
            (origin, uv[0]),
            (origin + u_axis, uv[1]),
            (origin + u_axis + v_axis, uv[2]),
            (origin + v_axis, uv[3]),
        ]);
    }
    mesh
}

fn sphere() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(SPHERE_STACKS, SPHERE_SLICES, |u, v| {
        let phi = PI * (v - 0.5);
        let theta = TAU * u;
        let position = Vec3::new(phi.cos() * theta.cos(), phi.sin(), -phi.cos() * theta.sin());
        (position, position)
    });
    mesh
}

fn cylinder() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(1, ROUND_SIDES, |u, v| {
        let theta = -TAU * u;
        let (sin, cos) = theta.sin_cos();
        (Vec3::new(cos, v, sin), Vec3::new(cos, 0.0, sin))
    });
    mesh.push_disc(1.0, true);
    mesh.push_disc(0.0, false);
    mesh
}

fn cone() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(1, ROUND_SIDES, |u, v| {
        let theta = -TAU * u;
        let (sin, cos) = theta.sin_cos();
        let radius = 1.0 - v;
        // Slant normal for a unit-radius, unit-height cone.
        (Vec3::new(cos * radius, v, sin * radius), Vec3::new(cos, 1.0, sin))
    });
    mesh.push_disc(0.0, false);
    mesh
}

fn pyramid() -> MeshData {
    let mut mesh = MeshData::default();
    let apex = Vec3::new(0.0, 0.5, 0.0);
    let base = [
        Vec3::new(-0.5, -0.5, 0.5),
        Vec3::new(0.5, -0.5, 0.5),
        Vec3::new(0.5, -0.5, -0.5),
        Vec3::new(-0.5, -0.5, -0.5),
    ];
    for i in 0..base.len() {
        let next = (i + 1) % base.len();
        mesh.push_face(&[(base[i], [0.0, 0.0]), (base[next], [1.0, 0.0]), (apex, [0.5, 1.0])]);
    }
    mesh.push_face(&[
        (base[3], [0.0, 0.0]),
        (base[2], [1.0, 0.0]),
        (base[1], [1.0, 1.0]),
        (base[0], [0.0, 1.0]),
    ]);
    mesh
}

fn torus() -> MeshData {
    let mut mesh = MeshData::default();
    mesh.push_grid(TORUS_TUBE_SEGMENTS, TORUS_RING_SEGMENTS, |u, v| {
        let ring = TAU * u;
        let tube = TAU * v;
        let ring_dir = Vec3::new(ring.cos(), ring.sin(), 0.0);
        let normal = ring_dir * tube.cos() + Vec3::Z * tube.sin();
        let position = ring_dir * TORUS_MAIN_RADIUS + normal * TORUS_TUBE_RADIUS;
        (position, normal)
    });
    mesh
}
