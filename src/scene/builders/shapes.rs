//! Wireframe building blocks shared by the scene generators.
//!
//! Everything returns raw `Vec3` vertex/segment data in local space;
//! placement and orientation are handled by wrapping [`GroupNode`]s.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// `0xRRGGBB` to linear-ish RGB in [0,1].
pub fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// HSL to RGB, all components in [0,1].
pub fn hsl(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}

/// Linear blend between two colors.
pub fn mix(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Connect every vertex pair sitting at (approximately) the minimum pairwise
/// distance - the edge set of any regular polyhedron vertex cloud.
pub fn edges(verts: &[Vec3]) -> Vec<[Vec3; 2]> {
    let mut min_d2 = f32::MAX;
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            min_d2 = min_d2.min(verts[i].distance_squared(verts[j]));
        }
    }
    let limit = min_d2 * 1.1;
    let mut out = Vec::new();
    for i in 0..verts.len() {
        for j in (i + 1)..verts.len() {
            if verts[i].distance_squared(verts[j]) <= limit {
                out.push([verts[i], verts[j]]);
            }
        }
    }
    out
}

pub fn tetrahedron(radius: f32) -> Vec<Vec3> {
    let s = radius / 3f32.sqrt();
    vec![
        Vec3::new(s, s, s),
        Vec3::new(s, -s, -s),
        Vec3::new(-s, s, -s),
        Vec3::new(-s, -s, s),
    ]
}

pub fn octahedron(radius: f32) -> Vec<Vec3> {
    vec![
        Vec3::X * radius,
        Vec3::NEG_X * radius,
        Vec3::Y * radius,
        Vec3::NEG_Y * radius,
        Vec3::Z * radius,
        Vec3::NEG_Z * radius,
    ]
}

pub fn cube(half: Vec3) -> Vec<Vec3> {
    let mut out = Vec::with_capacity(8);
    for &x in &[-half.x, half.x] {
        for &y in &[-half.y, half.y] {
            for &z in &[-half.z, half.z] {
                out.push(Vec3::new(x, y, z));
            }
        }
    }
    out
}

pub fn icosahedron(radius: f32) -> Vec<Vec3> {
    let phi = (1.0 + 5f32.sqrt()) / 2.0;
    let mut out = Vec::with_capacity(12);
    for &a in &[-1.0f32, 1.0] {
        for &b in &[-phi, phi] {
            out.push(Vec3::new(a, b, 0.0));
            out.push(Vec3::new(0.0, a, b));
            out.push(Vec3::new(b, 0.0, a));
        }
    }
    out.iter().map(|v| v.normalize() * radius).collect()
}

pub fn dodecahedron(radius: f32) -> Vec<Vec3> {
    let phi = (1.0 + 5f32.sqrt()) / 2.0;
    let inv = 1.0 / phi;
    let mut out = cube(Vec3::ONE);
    for &a in &[-1.0f32, 1.0] {
        for &b in &[-1.0f32, 1.0] {
            out.push(Vec3::new(0.0, a * inv, b * phi));
            out.push(Vec3::new(a * inv, b * phi, 0.0));
            out.push(Vec3::new(a * phi, 0.0, b * inv));
        }
    }
    out.iter().map(|v| v.normalize() * radius).collect()
}

/// Closed loop of segments in the XY plane.
pub fn circle(radius: f32, segments: usize) -> Vec<[Vec3; 2]> {
    let pts: Vec<Vec3> = (0..=segments)
        .map(|i| {
            let a = TAU * i as f32 / segments as f32;
            Vec3::new(a.cos() * radius, a.sin() * radius, 0.0)
        })
        .collect();
    polyline(&pts)
}

/// Open polyline through the given points.
pub fn polyline(points: &[Vec3]) -> Vec<[Vec3; 2]> {
    points.windows(2).map(|w| [w[0], w[1]]).collect()
}

/// Latitude/longitude wireframe sphere.
pub fn sphere(radius: f32, rings: usize, sectors: usize) -> Vec<[Vec3; 2]> {
    let mut out = Vec::new();
    // Latitude loops (poles excluded)
    for r in 1..rings {
        let phi = PI * r as f32 / rings as f32;
        let y = phi.cos() * radius;
        let ring_r = phi.sin() * radius;
        let pts: Vec<Vec3> = (0..=sectors)
            .map(|s| {
                let a = TAU * s as f32 / sectors as f32;
                Vec3::new(a.cos() * ring_r, y, a.sin() * ring_r)
            })
            .collect();
        out.extend(polyline(&pts));
    }
    // Meridians
    for s in 0..sectors {
        let a = TAU * s as f32 / sectors as f32;
        let pts: Vec<Vec3> = (0..=rings)
            .map(|r| {
                let phi = PI * r as f32 / rings as f32;
                Vec3::new(
                    a.cos() * phi.sin() * radius,
                    phi.cos() * radius,
                    a.sin() * phi.sin() * radius,
                )
            })
            .collect();
        out.extend(polyline(&pts));
    }
    out
}

/// Axis-aligned box wireframe (12 edges) centered at the origin.
pub fn box_wire(size: Vec3) -> Vec<[Vec3; 2]> {
    edges(&cube(size / 2.0))
}

/// Square grid of lines in the XZ plane, `divisions` cells per side.
pub fn grid(extent: f32, divisions: usize) -> Vec<[Vec3; 2]> {
    let mut out = Vec::with_capacity((divisions + 1) * 2);
    for i in 0..=divisions {
        let t = -extent + 2.0 * extent * i as f32 / divisions as f32;
        out.push([Vec3::new(t, 0.0, -extent), Vec3::new(t, 0.0, extent)]);
        out.push([Vec3::new(-extent, 0.0, t), Vec3::new(extent, 0.0, t)]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyhedron_edge_counts() {
        assert_eq!(edges(&tetrahedron(1.0)).len(), 6);
        assert_eq!(edges(&octahedron(1.0)).len(), 12);
        assert_eq!(edges(&cube(Vec3::ONE)).len(), 12);
        assert_eq!(edges(&icosahedron(1.0)).len(), 30);
        assert_eq!(edges(&dodecahedron(1.0)).len(), 30);
    }

    #[test]
    fn test_vertices_sit_on_radius() {
        for v in icosahedron(3.0) {
            assert!((v.length() - 3.0).abs() < 1e-4);
        }
        for v in dodecahedron(2.0) {
            assert!((v.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_circle_closes() {
        let segs = circle(1.0, 16);
        assert_eq!(segs.len(), 16);
        let first = segs.first().unwrap()[0];
        let last = segs.last().unwrap()[1];
        assert!(first.distance(last) < 1e-5);
    }

    #[test]
    fn test_rgb_unpack() {
        assert_eq!(rgb(0xff0000), [1.0, 0.0, 0.0]);
        let c = rgb(0xff3c00);
        assert!((c[1] - 60.0 / 255.0).abs() < 1e-6);
    }
}
