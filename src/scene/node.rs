//! Scene graph: tagged node variants and the opacity propagator.
//!
//! # Architecture
//!
//! The graph is a closed enum rather than a duck-typed tree:
//! - [`SceneNode::Group`] - children, placement, visibility, idle motion
//! - [`SceneNode::Points`] - particle cloud leaf
//! - [`SceneNode::Lines`] - wireframe leaf
//!
//! Leaves carry one or more [`Material`]s. Each material remembers its
//! authored `base_opacity` ("fully visible" level); the propagator only ever
//! writes the *rendered* opacity as `base_opacity * factor`, so repeated
//! crossfades cannot drift and a factor of 1.0 restores the authored look
//! exactly.
//!
//! Geometry arrays (positions, colors, sizes) are never touched by the
//! propagator - it recurses on groups and rewrites materials, nothing else.

use glam::Vec3;

/// Render material for a leaf. Colors are linear RGB in [0,1].
#[derive(Clone, Debug)]
pub struct Material {
    pub color: [f32; 3],
    /// Authored "fully visible" opacity. Never written after construction.
    base_opacity: f32,
    /// Rendered opacity: `base_opacity * current fade factor`.
    pub opacity: f32,
    /// Alpha blending enabled. Forced on by the propagator.
    pub transparent: bool,
    /// Additive-style glow blending (painter brightens instead of covers).
    pub additive: bool,
}

impl Material {
    pub fn new(color: [f32; 3], base_opacity: f32) -> Self {
        Self {
            color,
            base_opacity,
            opacity: base_opacity,
            transparent: base_opacity < 1.0,
            additive: false,
        }
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }

    pub fn base_opacity(&self) -> f32 {
        self.base_opacity
    }
}

/// Interior node: placement, visibility and idle motion for its subtree.
#[derive(Clone, Debug, Default)]
pub struct GroupNode {
    pub children: Vec<SceneNode>,
    /// Render-visibility flag. Scene roots are toggled by the director;
    /// an invisible subtree costs nothing at paint time.
    pub visible: bool,
    pub position: Vec3,
    /// Static orientation (radians, XYZ).
    pub rotation: Vec3,
    /// Idle rotation in rad/s per axis, sampled at paint time.
    pub spin: Vec3,
    /// Scale oscillation amplitude (0 = none), sampled at paint time.
    pub pulse: f32,
}

impl GroupNode {
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Default::default()
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn spinning(mut self, spin: Vec3) -> Self {
        self.spin = spin;
        self
    }

    pub fn pulsing(mut self, pulse: f32) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn add(&mut self, child: SceneNode) {
        self.children.push(child);
    }
}

/// Particle cloud leaf. `colors`/`sizes` are optional per-point overrides;
/// when empty, the first material's color and `size` apply to all points.
#[derive(Clone, Debug)]
pub struct PointsNode {
    pub positions: Vec<Vec3>,
    pub colors: Vec<[f32; 3]>,
    pub sizes: Vec<f32>,
    pub size: f32,
    pub materials: Vec<Material>,
}

impl PointsNode {
    pub fn new(positions: Vec<Vec3>, size: f32, material: Material) -> Self {
        Self {
            positions,
            colors: Vec::new(),
            sizes: Vec::new(),
            size,
            materials: vec![material],
        }
    }

    pub fn with_colors(mut self, colors: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(colors.len(), self.positions.len());
        self.colors = colors;
        self
    }

    pub fn with_sizes(mut self, sizes: Vec<f32>) -> Self {
        debug_assert_eq!(sizes.len(), self.positions.len());
        self.sizes = sizes;
        self
    }
}

/// Wireframe leaf: a batch of line segments sharing materials.
#[derive(Clone, Debug)]
pub struct LinesNode {
    pub segments: Vec<[Vec3; 2]>,
    pub width: f32,
    pub materials: Vec<Material>,
}

impl LinesNode {
    pub fn new(segments: Vec<[Vec3; 2]>, width: f32, material: Material) -> Self {
        Self {
            segments,
            width,
            materials: vec![material],
        }
    }

    /// Extra material layered over the same segments (e.g. a glow pass).
    pub fn with_layer(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }
}

/// A node in the renderable tree.
#[derive(Clone, Debug)]
pub enum SceneNode {
    Group(GroupNode),
    Points(PointsNode),
    Lines(LinesNode),
}

impl SceneNode {
    /// Materials of this node if it is a leaf.
    pub fn materials(&self) -> &[Material] {
        match self {
            SceneNode::Group(_) => &[],
            SceneNode::Points(p) => &p.materials,
            SceneNode::Lines(l) => &l.materials,
        }
    }
}

impl From<GroupNode> for SceneNode {
    fn from(g: GroupNode) -> Self {
        SceneNode::Group(g)
    }
}

impl From<PointsNode> for SceneNode {
    fn from(p: PointsNode) -> Self {
        SceneNode::Points(p)
    }
}

impl From<LinesNode> for SceneNode {
    fn from(l: LinesNode) -> Self {
        SceneNode::Lines(l)
    }
}

/// Rewrite rendered opacity across a subtree: every leaf material gets
/// `opacity = base_opacity * factor` with blending forced on.
///
/// `factor` is expected in [0,1]; the caller guarantees it. Idempotent for a
/// fixed factor, and `factor = 1.0` restores every baseline exactly. Called
/// every frame of a fade ramp, so it visits only groups and leaves - never
/// geometry arrays.
pub fn set_opacity(node: &mut SceneNode, factor: f32) {
    match node {
        SceneNode::Group(group) => {
            for child in &mut group.children {
                set_opacity(child, factor);
            }
        }
        SceneNode::Points(points) => fade_materials(&mut points.materials, factor),
        SceneNode::Lines(lines) => fade_materials(&mut lines.materials, factor),
    }
}

fn fade_materials(materials: &mut [Material], factor: f32) {
    for mat in materials {
        mat.transparent = true;
        mat.opacity = mat.base_opacity * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> SceneNode {
        let mut inner = GroupNode::new();
        inner.add(
            LinesNode::new(
                vec![[Vec3::ZERO, Vec3::X]],
                1.0,
                Material::new([1.0, 1.0, 1.0], 0.3),
            )
            .with_layer(Material::new([1.0, 0.2, 0.0], 0.8))
            .into(),
        );

        let mut root = GroupNode::new();
        root.add(
            PointsNode::new(vec![Vec3::ZERO], 2.0, Material::new([1.0, 1.0, 1.0], 0.9)).into(),
        );
        root.add(inner.into());
        root.into()
    }

    fn collect_opacities(node: &SceneNode, out: &mut Vec<f32>) {
        match node {
            SceneNode::Group(g) => {
                for c in &g.children {
                    collect_opacities(c, out);
                }
            }
            _ => out.extend(node.materials().iter().map(|m| m.opacity)),
        }
    }

    #[test]
    fn test_set_opacity_scales_baselines() {
        let mut root = sample_tree();
        set_opacity(&mut root, 0.5);

        let mut got = Vec::new();
        collect_opacities(&root, &mut got);
        let expect = [0.45, 0.15, 0.4];
        assert_eq!(got.len(), expect.len());
        for (g, e) in got.iter().zip(expect) {
            assert!((g - e).abs() < 1e-6, "got {g}, expected {e}");
        }
    }

    #[test]
    fn test_factor_one_restores_baselines_without_drift() {
        let mut root = sample_tree();
        // Arbitrary fade history must not accumulate
        for factor in [0.3, 0.0, 0.77, 0.1] {
            set_opacity(&mut root, factor);
        }
        set_opacity(&mut root, 1.0);

        let mut got = Vec::new();
        collect_opacities(&root, &mut got);
        for (g, e) in got.iter().zip([0.9, 0.3, 0.8]) {
            assert!((g - e).abs() < 1e-6, "got {g}, expected {e}");
        }
    }

    #[test]
    fn test_multi_material_leaf_fades_every_layer() {
        let mut node: SceneNode = LinesNode::new(
            vec![[Vec3::ZERO, Vec3::Y]],
            1.0,
            Material::new([1.0, 1.0, 1.0], 1.0),
        )
        .with_layer(Material::new([0.0, 1.0, 0.5], 0.4))
        .into();

        set_opacity(&mut node, 0.25);
        let mats = node.materials();
        assert!((mats[0].opacity - 0.25).abs() < 1e-6);
        assert!((mats[1].opacity - 0.1).abs() < 1e-6);
        assert!(mats.iter().all(|m| m.transparent));
    }
}
