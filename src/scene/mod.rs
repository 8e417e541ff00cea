//! Scene model - the renderable world the transition controller drives.
//!
//! **Architecture**: [`Stage`] owns everything visual (scene roots, cards,
//! camera). The director does NOT own the stage; it receives `&mut Stage`
//! when a transition needs to drive it. The app holds the single Stage
//! instance.
//!
//! All scenes are constructed once at startup; afterwards only
//! visibility/opacity/card state changes until the app tears down.

pub mod camera;
pub mod defs;
pub mod builders;
pub mod node;

use glam::Vec3;
use log::info;

use camera::Camera;
use defs::{SceneSpec, SCENES, SCENE_COUNT};
use node::{GroupNode, SceneNode};

/// Visual state of a scene's text card (the egui rendition of the original
/// DOM panel and its "visible" class).
#[derive(Clone, Copy, Debug)]
pub struct CardState {
    pub visible: bool,
    pub opacity: f32,
    pub offset_y: f32,
}

impl CardState {
    fn hidden() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            offset_y: 0.0,
        }
    }

    fn shown() -> Self {
        Self {
            visible: true,
            opacity: 1.0,
            offset_y: 0.0,
        }
    }
}

/// One stage of the journey: spec copy, 3D content root, depth, card.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spec: &'static SceneSpec,
    /// Always the `Group` variant; kept as [`SceneNode`] so the opacity
    /// propagator recurses over it directly.
    pub root: SceneNode,
    pub depth: f32,
    /// `None` models a scene without a card; the director then releases the
    /// transition lock on the fallback deadline instead.
    pub card: Option<CardState>,
}

impl Scene {
    pub fn root_group(&self) -> &GroupNode {
        match &self.root {
            SceneNode::Group(g) => g,
            _ => unreachable!("scene roots are always groups"),
        }
    }

    pub fn root_group_mut(&mut self) -> &mut GroupNode {
        match &mut self.root {
            SceneNode::Group(g) => g,
            _ => unreachable!("scene roots are always groups"),
        }
    }
}

/// The whole renderable world, owned by the app.
#[derive(Clone, Debug)]
pub struct Stage {
    pub scenes: Vec<Scene>,
    pub camera: Camera,
}

impl Stage {
    /// Generate all scenes and set the boot state: only scene 0 visible at
    /// full opacity, its card shown, camera parked in front of it.
    ///
    /// A malformed roster is a programmer error - caught here by assertions,
    /// never at transition time.
    pub fn build(seed: u64) -> Self {
        let roots = builders::build_all(seed);
        assert_eq!(roots.len(), SCENE_COUNT, "scene generator roster mismatch");

        let mut scenes: Vec<Scene> = SCENES
            .iter()
            .zip(roots)
            .enumerate()
            .map(|(i, (spec, mut group))| {
                let depth = defs::depth(i);
                group.position = Vec3::new(0.0, 0.0, depth);
                group.visible = i == 0;
                let mut scene = Scene {
                    spec,
                    root: group.into(),
                    depth,
                    card: Some(if i == 0 {
                        CardState::shown()
                    } else {
                        CardState::hidden()
                    }),
                };
                if i == 0 {
                    node::set_opacity(&mut scene.root, 1.0);
                }
                scene
            })
            .collect();

        debug_assert!(
            scenes.windows(2).all(|w| w[1].depth < w[0].depth),
            "scene depths must strictly decrease along the journey"
        );

        // Scenes start fully faded except the first
        for scene in scenes.iter_mut().skip(1) {
            node::set_opacity(&mut scene.root, 0.0);
        }

        info!("Stage built: {} scenes, seed {}", scenes.len(), seed);

        Self {
            scenes,
            camera: Camera::at_depth(defs::depth(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn has_card(&self, index: usize) -> bool {
        self.scenes.get(index).is_some_and(|s| s.card.is_some())
    }

    /// Toggle render-visibility of a scene root.
    pub fn set_scene_visible(&mut self, index: usize, visible: bool) {
        if let Some(scene) = self.scenes.get_mut(index) {
            scene.root_group_mut().visible = visible;
        }
    }

    /// Drive the opacity propagator over a scene's subtree.
    pub fn set_scene_opacity(&mut self, index: usize, factor: f32) {
        if let Some(scene) = self.scenes.get_mut(index) {
            node::set_opacity(&mut scene.root, factor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_state() {
        let stage = Stage::build(7);
        assert_eq!(stage.len(), SCENE_COUNT);
        for (i, scene) in stage.scenes.iter().enumerate() {
            assert_eq!(scene.root_group().visible, i == 0, "visibility of scene {i}");
            let card = scene.card.expect("built scenes all have cards");
            assert_eq!(card.visible, i == 0, "card visibility of scene {i}");
        }
        assert_eq!(stage.camera.position.z, camera::Camera::rest_z(0.0));
    }

    #[test]
    fn test_build_is_deterministic_for_a_seed() {
        let a = Stage::build(42);
        let b = Stage::build(42);
        // Compare a coarse structural fingerprint
        fn leaves(node: &SceneNode, n: &mut usize) {
            match node {
                SceneNode::Group(g) => g.children.iter().for_each(|c| leaves(c, n)),
                SceneNode::Points(p) => *n += p.positions.len(),
                SceneNode::Lines(l) => *n += l.segments.len(),
            }
        }
        for (sa, sb) in a.scenes.iter().zip(&b.scenes) {
            let (mut na, mut nb) = (0, 0);
            leaves(&sa.root, &mut na);
            leaves(&sb.root, &mut nb);
            assert_eq!(na, nb);
            assert!(na > 0, "scene {} generated no geometry", sa.spec.id);
        }
    }
}
