//! Particle-dominant scenes: stardust, terrain, aurora, quantum noise, storm.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::palette::*;
use super::unit;
use super::shapes;
use crate::scene::node::{GroupNode, LinesNode, Material, PointsNode};

fn rgb(hex: u32) -> [f32; 3] {
    shapes::rgb(hex)
}

/// Random point in a spherical shell between `r0` and `r1`.
fn shell_point(rng: &mut StdRng, r0: f32, r1: f32) -> Vec3 {
    let radius = r0 + unit(rng) * (r1 - r0);
    let theta = unit(rng) * TAU;
    let phi = (2.0 * unit(rng) - 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Scene 1 - NEBULA GENESIS. Reactive stardust field around a glowing orb.
pub fn particle_field(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let swatches = [rgb(ACCENT), rgb(WHITE), rgb(GREEN), rgb(VIOLET)];
    let count = 1200;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);
    for _ in 0..count {
        positions.push(shell_point(rng, 15.0, 35.0) - Vec3::new(0.0, 0.0, 5.0));
        colors.push(swatches[rng.gen_range(0..swatches.len())]);
        sizes.push(1.0 + unit(rng) * 3.0);
    }
    let mut dust = GroupNode::new().spinning(Vec3::new(0.0, 0.03, 0.0));
    dust.add(
        PointsNode::new(positions, 2.0, Material::new(rgb(WHITE), 0.9).additive())
            .with_colors(colors)
            .with_sizes(sizes)
            .into(),
    );
    group.add(dust.into());

    // Central orb glow
    let mut orb = GroupNode::new()
        .spinning(Vec3::new(0.0, 0.1, 0.0))
        .pulsing(0.1);
    orb.add(LinesNode::new(shapes::sphere(2.0, 6, 10), 1.0, Material::new(rgb(ACCENT), 0.15)).into());
    group.add(orb.into());

    // Outer glow ring
    let mut ring = GroupNode::new()
        .rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0))
        .spinning(Vec3::new(0.0, 0.0, 0.2))
        .pulsing(0.05);
    ring.add(LinesNode::new(shapes::circle(3.25, 64), 1.5, Material::new(rgb(WHITE), 0.1)).into());
    group.add(ring.into());

    group
}

/// Scene 3 - DIGITAL TERRAIN. Ground matrix, unstable pillars, drifting motes.
pub fn grid_terrain(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let mut floor = GroupNode::new().at(Vec3::new(0.0, -3.0, -5.0));
    floor.add(LinesNode::new(shapes::grid(20.0, 20), 1.0, Material::new(rgb(GREEN), 0.4)).into());
    group.add(floor.into());

    for i in 0..20 {
        let height = 2.0 + unit(rng) * 6.0;
        let color = if i % 3 == 0 { ACCENT } else { WHITE };
        let mut pillar = GroupNode::new().at(Vec3::new(
            (unit(rng) - 0.5) * 30.0,
            height / 2.0 - 3.0,
            (unit(rng) - 0.5) * 20.0 - 5.0,
        ));
        pillar.add(
            LinesNode::new(
                shapes::box_wire(Vec3::new(0.1, height, 0.1)),
                1.0,
                Material::new(rgb(color), 0.6),
            )
            .into(),
        );
        group.add(pillar.into());
    }

    let motes: Vec<Vec3> = (0..300)
        .map(|_| {
            Vec3::new(
                (unit(rng) - 0.5) * 40.0,
                unit(rng) * 10.0 - 3.0,
                (unit(rng) - 0.5) * 30.0 - 5.0,
            )
        })
        .collect();
    group.add(PointsNode::new(motes, 1.5, Material::new(rgb(GREEN), 0.5).additive()).into());

    group
}

/// Scene 5 - AURORA VEIL. Layered sine ribbons plus spectral haze.
pub fn aurora(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let ribbon_colors = [GREEN, VIOLET, CYAN];
    for i in 0..6 {
        let base_y = (i as f32 - 3.0) * 2.0;
        let wobble = (i as f32).sin() * 2.0;
        let pts: Vec<Vec3> = (0..=50)
            .map(|s| {
                let t = s as f32 / 50.0;
                let x = -15.0 + 30.0 * t;
                let y = base_y + wobble * (1.0 - 2.0 * t) + (t * PI * 2.0 + i as f32 * 0.5).sin() * 1.2;
                Vec3::new(x, y, -3.0)
            })
            .collect();
        let mut ribbon = GroupNode::new()
            .spinning(Vec3::new(0.0, 0.0, 0.04))
            .pulsing(0.04);
        ribbon.add(
            LinesNode::new(
                shapes::polyline(&pts),
                1.5 + i as f32 * 0.2,
                Material::new(rgb(ribbon_colors[i % ribbon_colors.len()]), 0.25).additive(),
            )
            .into(),
        );
        group.add(ribbon.into());
    }

    let count = 500;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        positions.push(Vec3::new(
            (unit(rng) - 0.5) * 35.0,
            (unit(rng) - 0.5) * 15.0,
            (unit(rng) - 0.5) * 15.0 - 5.0,
        ));
        colors.push(shapes::hsl(0.4 + unit(rng) * 0.3, 0.8, 0.6));
    }
    group.add(
        PointsNode::new(positions, 1.5, Material::new(rgb(WHITE), 0.6).additive())
            .with_colors(colors)
            .into(),
    );

    group
}

/// Scene 7 - QUANTUM REALM. Superposed particles, nucleus, electron shells.
pub fn quantum_realm(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let count = 800;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        positions.push(Vec3::new(
            (unit(rng) - 0.5) * 25.0,
            (unit(rng) - 0.5) * 20.0,
            (unit(rng) - 0.5) * 15.0 - 5.0,
        ));
        colors.push(shapes::mix(rgb(CYAN), rgb(VIOLET), unit(rng)));
    }
    group.add(
        PointsNode::new(positions, 1.8, Material::new(rgb(WHITE), 0.8).additive())
            .with_colors(colors)
            .into(),
    );

    let mut nucleus = GroupNode::new()
        .spinning(Vec3::new(0.3, 0.5, 0.0))
        .pulsing(0.12);
    nucleus.add(
        LinesNode::new(
            shapes::edges(&shapes::octahedron(2.0)),
            1.5,
            Material::new(rgb(VIOLET), 0.5),
        )
        .into(),
    );
    group.add(nucleus.into());

    for i in 0..4 {
        let mut shell = GroupNode::new()
            .rotated(Vec3::new(FRAC_PI_2 + i as f32 * 0.3, 0.0, 0.0))
            .spinning(Vec3::new(0.0, 0.0, 0.1 + i as f32 * 0.05));
        shell.add(
            LinesNode::new(
                shapes::circle(4.0 + i as f32 * 2.0, 64),
                1.0,
                Material::new(rgb(CYAN), 0.2 - i as f32 * 0.03),
            )
            .into(),
        );
        group.add(shell.into());
    }

    group
}

/// Scene 11 - COSMIC STORM. Dark cloud shells, frozen lightning, charged rain.
pub fn cosmic_storm(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    for _ in 0..8 {
        let mut cloud = GroupNode::new().at(Vec3::new(
            (unit(rng) - 0.5) * 24.0,
            (unit(rng) - 0.5) * 12.0,
            (unit(rng) - 0.5) * 10.0 - 4.0,
        ));
        cloud.add(
            LinesNode::new(
                shapes::sphere(2.0 + unit(rng) * 2.0, 4, 6),
                1.0,
                Material::new(rgb(CLOUD), 0.3),
            )
            .into(),
        );
        group.add(cloud.into());
    }

    // Jagged strikes, frozen mid-flash
    for _ in 0..5 {
        let mut x = (unit(rng) - 0.5) * 20.0;
        let mut y = 8.0;
        let mut pts = vec![Vec3::new(x, y, -4.0)];
        while y > -6.0 {
            x += (unit(rng) - 0.5) * 3.0;
            y -= 1.0 + unit(rng) * 2.0;
            pts.push(Vec3::new(x, y, -4.0));
        }
        group.add(
            LinesNode::new(
                shapes::polyline(&pts),
                2.0,
                Material::new(rgb(WHITE), 0.25).additive(),
            )
            .into(),
        );
    }

    let drops: Vec<Vec3> = (0..600)
        .map(|_| {
            Vec3::new(
                (unit(rng) - 0.5) * 30.0,
                (unit(rng) - 0.5) * 18.0,
                (unit(rng) - 0.5) * 12.0 - 4.0,
            )
        })
        .collect();
    group.add(PointsNode::new(drops, 1.5, Material::new(rgb(STORM), 0.5).additive()).into());

    group
}
