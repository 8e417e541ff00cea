//! Structure scenes: crystalline solids, networks, mirrors and cores.

use glam::Vec3;
use rand::rngs::StdRng;
use std::f32::consts::{FRAC_PI_2, TAU};

use super::palette::*;
use super::unit;
use super::shapes;
use crate::scene::node::{GroupNode, LinesNode, Material, PointsNode};

fn rgb(hex: u32) -> [f32; 3] {
    shapes::rgb(hex)
}

fn wire(verts: &[Vec3], width: f32, color: u32, base_opacity: f32) -> LinesNode {
    LinesNode::new(shapes::edges(verts), width, Material::new(rgb(color), base_opacity))
}

/// Scene 2 - CRYSTAL ARTIFACT. Nested solids with an orbiting shard belt.
pub fn artifact(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let mut crystal = GroupNode::new().spinning(Vec3::new(0.05, 0.2, 0.0));
    crystal.add(wire(&shapes::dodecahedron(3.0), 1.5, GREEN, 0.15).into());
    group.add(crystal.into());

    let mut core = GroupNode::new()
        .spinning(Vec3::new(0.0, -0.3, 0.1))
        .pulsing(0.15);
    core.add(wire(&shapes::icosahedron(1.5), 1.5, ACCENT, 0.3).into());
    group.add(core.into());

    let mut cage = GroupNode::new().spinning(Vec3::new(-0.03, 0.08, 0.0));
    cage.add(wire(&shapes::icosahedron(4.5), 1.0, WHITE, 0.08).into());
    group.add(cage.into());

    // Shard belt: gradient accent -> white around the equator
    let count = 60;
    let mut positions = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        let radius = 5.0 + (i as f32 * 0.5).sin();
        positions.push(Vec3::new(
            angle.cos() * radius,
            (unit(rng) - 0.5) * 4.0,
            angle.sin() * radius,
        ));
        colors.push(shapes::mix(rgb(ACCENT), rgb(WHITE), i as f32 / count as f32));
    }
    let mut belt = GroupNode::new().spinning(Vec3::new(0.0, 0.25, 0.0));
    belt.add(
        PointsNode::new(positions, 2.0, Material::new(rgb(WHITE), 0.8).additive())
            .with_colors(colors)
            .into(),
    );
    group.add(belt.into());

    group
}

/// Scene 6 - SOLAR FORGE. Dying star: core, coronas, flares, embers.
pub fn solar_forge(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let mut sun = GroupNode::new()
        .spinning(Vec3::new(0.0, 0.15, 0.0))
        .pulsing(0.08);
    sun.add(wire(&shapes::icosahedron(3.0), 1.5, ACCENT, 0.9).into());
    group.add(sun.into());

    let corona_colors = [EMBER, AMBER, GOLD];
    for i in 0..3 {
        group.add(
            LinesNode::new(
                shapes::sphere(4.0 + i as f32 * 1.5, 6, 10),
                1.0,
                Material::new(rgb(corona_colors[i]), 0.1 - i as f32 * 0.02).additive(),
            )
            .into(),
        );
    }

    for i in 0..12 {
        let angle = TAU * i as f32 / 12.0;
        let mut flare = GroupNode::new()
            .at(Vec3::new(angle.cos() * 5.0, angle.sin() * 5.0, 0.0))
            .rotated(Vec3::new(0.0, 0.0, angle - FRAC_PI_2));
        flare.add(
            LinesNode::new(
                shapes::box_wire(Vec3::new(0.05, 8.0, 0.05)),
                1.0,
                Material::new(rgb(GOLD), 0.4).additive(),
            )
            .into(),
        );
        group.add(flare.into());
    }

    let embers: Vec<Vec3> = (0..300)
        .map(|_| {
            let radius = 6.0 + unit(rng) * 10.0;
            let angle = unit(rng) * TAU;
            Vec3::new(
                angle.cos() * radius,
                (unit(rng) - 0.5) * 8.0,
                angle.sin() * radius,
            )
        })
        .collect();
    group.add(PointsNode::new(embers, 1.5, Material::new(rgb(EMBER), 0.6).additive()).into());

    group
}

/// Scene 8 - FRACTAL DIMENSION. Nested cubes, counter-rotating, plus a
/// spiral of points falling inward.
pub fn fractal_dimension(_rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    for i in 0..5 {
        let size = 1.5 * 1.6f32.powi(i);
        let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
        let mut cube = GroupNode::new().spinning(Vec3::new(0.0, dir * (0.3 - i as f32 * 0.04), dir * 0.05));
        cube.add(
            LinesNode::new(
                shapes::box_wire(Vec3::splat(size)),
                1.0,
                Material::new(rgb(if i % 2 == 0 { ACCENT } else { WHITE }), 0.15 + i as f32 * 0.02),
            )
            .into(),
        );
        group.add(cube.into());
    }

    let count = 500;
    let spiral: Vec<Vec3> = (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            let radius = 3.0 + t * 8.0;
            let angle = t * TAU * 3.0;
            Vec3::new(angle.cos() * radius, (t - 0.5) * 6.0, angle.sin() * radius - 5.0)
        })
        .collect();
    let mut arm = GroupNode::new().spinning(Vec3::new(0.0, -0.1, 0.0));
    arm.add(PointsNode::new(spiral, 1.5, Material::new(rgb(GREEN), 0.6).additive()).into());
    group.add(arm.into());

    group
}

/// Scene 9 - NEURAL PULSE. Node cloud wired by proximity.
pub fn neural_pulse(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let count = 24;
    let nodes: Vec<Vec3> = (0..count)
        .map(|_| {
            Vec3::new(
                (unit(rng) - 0.5) * 16.0,
                (unit(rng) - 0.5) * 12.0,
                (unit(rng) - 0.5) * 8.0 - 2.0,
            )
        })
        .collect();
    let colors: Vec<[f32; 3]> = (0..count)
        .map(|i| rgb(if i % 4 == 0 { ACCENT } else { GREEN }))
        .collect();

    let mut net = GroupNode::new().spinning(Vec3::new(0.0, 0.05, 0.0));
    net.add(
        PointsNode::new(nodes.clone(), 4.0, Material::new(rgb(GREEN), 0.8).additive())
            .with_colors(colors)
            .into(),
    );

    // Synapses: connect close node pairs only
    let mut links = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            if nodes[i].distance(nodes[j]) < 7.0 {
                links.push([nodes[i], nodes[j]]);
            }
        }
    }
    net.add(LinesNode::new(links, 1.0, Material::new(rgb(WHITE), 0.15)).into());
    group.add(net.into());

    let sparks: Vec<Vec3> = (0..400)
        .map(|_| {
            Vec3::new(
                (unit(rng) - 0.5) * 24.0,
                (unit(rng) - 0.5) * 16.0,
                (unit(rng) - 0.5) * 12.0 - 2.0,
            )
        })
        .collect();
    group.add(PointsNode::new(sparks, 1.2, Material::new(rgb(VIOLET), 0.4).additive()).into());

    group
}

/// Scene 10 - MIRROR REALM. A framed plane with orbiting shapes and their
/// dimmed reflections behind it.
pub fn mirror_realm(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    // Mirror plane: outline plus sparse inner grid
    let mut pane = GroupNode::new().rotated(Vec3::new(FRAC_PI_2, 0.0, 0.0));
    pane.add(LinesNode::new(shapes::grid(7.5, 4), 1.0, Material::new(rgb(WHITE), 0.08)).into());
    group.add(pane.into());

    let mut frame = GroupNode::new().spinning(Vec3::new(0.0, 0.0, 0.05));
    frame.add(LinesNode::new(shapes::circle(7.25, 64), 1.5, Material::new(rgb(ACCENT), 0.3)).into());
    group.add(frame.into());

    for i in 0..9 {
        let angle = TAU * i as f32 / 9.0;
        let radius = 4.0 + (i % 3) as f32;
        let pos = Vec3::new(angle.cos() * radius, angle.sin() * radius, 2.0);
        let verts = match i % 3 {
            0 => shapes::tetrahedron(0.5),
            1 => shapes::octahedron(0.4),
            _ => shapes::cube(Vec3::splat(0.5)),
        };
        let color = if i % 3 == 0 { GREEN } else { WHITE };
        let spin = Vec3::new(0.2, 0.3, 0.0) * if i % 2 == 0 { 1.0 } else { -1.0 };

        let mut shape = GroupNode::new().at(pos).spinning(spin);
        shape.add(wire(&verts, 1.0, color, 0.6).into());
        group.add(shape.into());

        // Reflection: same shard, mirrored depth, half presence
        let mut echo = GroupNode::new()
            .at(Vec3::new(pos.x, pos.y, -2.0))
            .spinning(-spin);
        echo.add(wire(&verts, 1.0, color, 0.3).into());
        group.add(echo.into());
    }

    let shimmer: Vec<Vec3> = (0..400)
        .map(|_| {
            Vec3::new(
                (unit(rng) - 0.5) * 20.0,
                (unit(rng) - 0.5) * 20.0,
                (unit(rng) - 0.5) * 8.0,
            )
        })
        .collect();
    group.add(PointsNode::new(shimmer, 1.2, Material::new(rgb(WHITE), 0.5).additive()).into());

    group
}

/// Scene 12 - STELLAR CONSTELLATION. Star map with traced connections.
pub fn constellation(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new().spinning(Vec3::new(0.0, 0.02, 0.0));

    let count = 40;
    let mut stars = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    let mut sizes = Vec::with_capacity(count);
    for i in 0..count {
        let radius = 5.0 + unit(rng) * 8.0;
        let theta = unit(rng) * TAU;
        let phi = (2.0 * unit(rng) - 1.0).acos();
        stars.push(Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos() * 0.5,
        ));
        colors.push(rgb(if i % 5 == 0 {
            ACCENT
        } else if i % 3 == 0 {
            GREEN
        } else {
            WHITE
        }));
        sizes.push(2.0 + unit(rng) * 3.0);
    }
    group.add(
        PointsNode::new(stars.clone(), 2.5, Material::new(rgb(WHITE), 0.9).additive())
            .with_colors(colors)
            .with_sizes(sizes)
            .into(),
    );

    // Navigation chart: link nearby stars
    let mut chart = Vec::new();
    for i in 0..stars.len() {
        for j in (i + 1)..stars.len() {
            if stars[i].distance(stars[j]) < 5.0 {
                chart.push([stars[i], stars[j]]);
            }
        }
    }
    group.add(LinesNode::new(chart, 1.0, Material::new(rgb(WHITE), 0.15)).into());

    // Golden dust drifting through the map
    let count = 800;
    let mut dust = Vec::with_capacity(count);
    let mut dust_colors = Vec::with_capacity(count);
    for _ in 0..count {
        dust.push(Vec3::new(
            (unit(rng) - 0.5) * 30.0,
            (unit(rng) - 0.5) * 20.0,
            (unit(rng) - 0.5) * 15.0 - 3.0,
        ));
        dust_colors.push(shapes::mix(rgb(GOLD), rgb(WHITE), unit(rng)));
    }
    group.add(
        PointsNode::new(dust, 1.2, Material::new(rgb(GOLD), 0.6).additive())
            .with_colors(dust_colors)
            .into(),
    );

    group
}

/// Scene 14 - GENESIS CORE. Origin and terminus: core, nucleus, orbits,
/// tendrils, converging matter.
pub fn genesis_core(rng: &mut StdRng) -> GroupNode {
    let mut group = GroupNode::new();

    let mut core = GroupNode::new()
        .spinning(Vec3::new(0.0, 0.1, 0.0))
        .pulsing(0.06);
    core.add(LinesNode::new(shapes::sphere(3.0, 8, 12), 1.0, Material::new(rgb(ACCENT), 0.7)).into());
    group.add(core.into());

    let mut nucleus = GroupNode::new().spinning(Vec3::new(0.2, -0.4, 0.0));
    nucleus.add(wire(&shapes::icosahedron(1.5), 1.5, WHITE, 0.9).into());
    group.add(nucleus.into());

    for i in 0..3 {
        let mut orbit = GroupNode::new()
            .rotated(Vec3::new(FRAC_PI_2 + i as f32 * 0.5, 0.0, i as f32 * 0.4))
            .spinning(Vec3::new(0.0, 0.0, 0.08 + i as f32 * 0.04));
        orbit.add(
            LinesNode::new(
                shapes::circle(5.0 + i as f32 * 2.0, 64),
                1.0,
                Material::new(rgb(if i % 2 == 0 { GREEN } else { WHITE }), 0.3),
            )
            .into(),
        );
        group.add(orbit.into());
    }

    // Tendrils spiraling out of the core
    for t in 0..4 {
        let offset = TAU * t as f32 / 4.0;
        let pts: Vec<Vec3> = (0..=30)
            .map(|s| {
                let u = s as f32 / 30.0;
                let radius = 3.0 + u * 9.0;
                let angle = offset + u * TAU * 0.75;
                Vec3::new(angle.cos() * radius, (u - 0.5) * 6.0 * (offset).sin(), angle.sin() * radius)
            })
            .collect();
        group.add(
            LinesNode::new(
                shapes::polyline(&pts),
                1.5,
                Material::new(rgb(ACCENT), 0.4).additive(),
            )
            .into(),
        );
    }

    let count = 600;
    let mut matter = Vec::with_capacity(count);
    let mut matter_colors = Vec::with_capacity(count);
    for _ in 0..count {
        let radius = 5.0 + unit(rng) * 15.0;
        let theta = unit(rng) * TAU;
        let phi = (2.0 * unit(rng) - 1.0).acos();
        matter.push(Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.sin() * theta.sin(),
            radius * phi.cos(),
        ));
        matter_colors.push(shapes::mix(rgb(ACCENT), rgb(WHITE), unit(rng)));
    }
    group.add(
        PointsNode::new(matter, 1.5, Material::new(rgb(WHITE), 0.7).additive())
            .with_colors(matter_colors)
            .into(),
    );

    group
}
