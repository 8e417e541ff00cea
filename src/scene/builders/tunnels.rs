//! Tunnel scenes: receding ring stacks with streaming particles.

use glam::Vec3;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

use super::palette::*;
use super::unit;
use super::shapes;
use crate::scene::node::{GroupNode, LinesNode, Material, PointsNode};

fn rgb(hex: u32) -> [f32; 3] {
    shapes::rgb(hex)
}

/// Scene 4 - EVENT HORIZON. Concentric rings falling toward a void sphere.
pub fn void_tunnel(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    for i in 0..15 {
        let radius = 3.0 + i as f32 * 0.8;
        let color = if i % 4 == 0 { ACCENT } else { WHITE };
        let mut ring = GroupNode::new()
            .at(Vec3::new(0.0, 0.0, -(i as f32) * 2.0))
            .pulsing(0.05);
        ring.add(
            LinesNode::new(
                shapes::circle(radius, 64),
                1.0,
                Material::new(rgb(color), 0.3 - i as f32 * 0.015),
            )
            .into(),
        );
        group.add(ring.into());
    }

    // The horizon itself, far down the throat
    let mut void = GroupNode::new()
        .at(Vec3::new(0.0, 0.0, -30.0))
        .spinning(Vec3::new(0.0, 0.1, 0.0));
    void.add(LinesNode::new(shapes::sphere(1.5, 6, 10), 1.0, Material::new(rgb(VIOLET), 0.5)).into());
    group.add(void.into());

    // Matter streaming inward
    let streams: Vec<Vec3> = (0..80)
        .map(|_| {
            let angle = unit(rng) * TAU;
            let radius = 2.0 + unit(rng) * 10.0;
            Vec3::new(
                angle.cos() * radius,
                angle.sin() * radius,
                unit(rng) * -30.0,
            )
        })
        .collect();
    group.add(PointsNode::new(streams, 1.5, Material::new(rgb(VIOLET), 0.6).additive()).into());

    group
}

/// Scene 13 - WARP TUNNEL. FTL transit: ragged rings, speed lines, a distant
/// exit light.
pub fn warp_tunnel(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    for i in 0..12 {
        let color = if i % 4 == 0 { ACCENT } else { WHITE };
        let mut ring = GroupNode::new()
            .at(Vec3::new(0.0, 0.0, -(i as f32) * 3.0 - 5.0))
            .spinning(Vec3::new(0.0, 0.0, if i % 2 == 0 { 0.3 } else { -0.3 }));
        ring.add(
            LinesNode::new(
                shapes::circle(3.0 + unit(rng) * 2.0, 32),
                1.0,
                Material::new(rgb(color), 0.2),
            )
            .into(),
        );
        group.add(ring.into());
    }

    // Speed lines hurtling along the axis
    let mut streaks = Vec::with_capacity(100);
    for _ in 0..100 {
        let angle = unit(rng) * TAU;
        let radius = 2.0 + unit(rng) * 6.0;
        let z = unit(rng) * -40.0;
        let len = 2.0 + unit(rng) * 4.0;
        let x = angle.cos() * radius;
        let y = angle.sin() * radius;
        streaks.push([Vec3::new(x, y, z), Vec3::new(x, y, z - len)]);
    }
    group.add(LinesNode::new(streaks, 1.0, Material::new(rgb(GREEN), 0.4).additive()).into());

    // Exit light
    let mut light = GroupNode::new()
        .at(Vec3::new(0.0, 0.0, -60.0))
        .pulsing(0.2);
    light.add(LinesNode::new(shapes::sphere(0.5, 4, 6), 1.5, Material::new(rgb(WHITE), 0.9).additive()).into());
    group.add(light.into());

    let flecks: Vec<Vec3> = (0..400)
        .map(|_| {
            let angle = unit(rng) * TAU;
            let radius = 1.0 + unit(rng) * 8.0;
            Vec3::new(
                angle.cos() * radius,
                angle.sin() * radius,
                unit(rng) * -50.0,
            )
        })
        .collect();
    group.add(PointsNode::new(flecks, 1.2, Material::new(rgb(VIOLET), 0.5).additive()).into());

    group
}
