//! Wireframe viewport - projects visible scene subtrees through the camera
//! onto the egui painter.
//!
//! Invisible roots are skipped entirely (a faded-out scene costs nothing).
//! Idle motion (`spin`/`pulse` on groups) is sampled here from the elapsed
//! time; nothing in the scene graph mutates during painting.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};
use glam::{EulerRot, Mat4, Vec3, Vec4};

use crate::scene::node::{GroupNode, LinesNode, Material, PointsNode, SceneNode};
use crate::scene::Stage;

/// Leaves faded below this are not worth a draw call.
const MIN_VISIBLE_OPACITY: f32 = 0.004;

/// World-units to point-radius tuning factor.
const POINT_SCALE: f32 = 0.05;

struct Projector {
    mvp: Mat4,
    rect: Rect,
    /// Pixels per world unit at clip w = 1 (projection m11 * half height).
    px_per_unit: f32,
}

impl Projector {
    /// Project a world point. Returns the screen position and the pixel size
    /// of one world unit at that depth; `None` when behind the camera or far
    /// outside the frustum.
    fn project(&self, p: Vec3) -> Option<(Pos2, f32)> {
        let clip: Vec4 = self.mvp * p.extend(1.0);
        if clip.w < 0.05 {
            return None;
        }
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        if ndc_x.abs() > 1.5 || ndc_y.abs() > 1.5 {
            return None;
        }
        let center = self.rect.center();
        let pos = Pos2::new(
            center.x + ndc_x * self.rect.width() / 2.0,
            center.y - ndc_y * self.rect.height() / 2.0,
        );
        Some((pos, self.px_per_unit / clip.w))
    }
}

/// Paint every visible scene. `time` is seconds since app start.
pub fn ui(ui: &mut egui::Ui, stage: &Stage, time: f32) {
    let rect = ui.max_rect();
    let painter = ui.painter();
    let aspect = rect.width() / rect.height().max(1.0);
    let view_proj = stage.camera.view_projection(aspect);
    let px_per_unit = (1.0 / (stage.camera.fov_y / 2.0).tan()) * rect.height() / 2.0;

    for scene in &stage.scenes {
        let group = scene.root_group();
        if group.visible {
            paint_group(painter, rect, view_proj, px_per_unit, Mat4::IDENTITY, group, time);
        }
    }
}

fn group_matrix(group: &GroupNode, time: f32) -> Mat4 {
    let rot = group.rotation + group.spin * time;
    let scale = if group.pulse != 0.0 {
        1.0 + (time * 2.0).sin() * group.pulse
    } else {
        1.0
    };
    Mat4::from_translation(group.position)
        * Mat4::from_euler(EulerRot::XYZ, rot.x, rot.y, rot.z)
        * Mat4::from_scale(Vec3::splat(scale))
}

fn paint_group(
    painter: &egui::Painter,
    rect: Rect,
    view_proj: Mat4,
    px_per_unit: f32,
    parent: Mat4,
    group: &GroupNode,
    time: f32,
) {
    let model = parent * group_matrix(group, time);
    for child in &group.children {
        match child {
            SceneNode::Group(g) => {
                if g.visible {
                    paint_group(painter, rect, view_proj, px_per_unit, model, g, time);
                }
            }
            SceneNode::Points(p) => {
                let proj = Projector {
                    mvp: view_proj * model,
                    rect,
                    px_per_unit,
                };
                for mat in &p.materials {
                    if mat.opacity >= MIN_VISIBLE_OPACITY {
                        paint_points(painter, &proj, p, mat);
                    }
                }
            }
            SceneNode::Lines(l) => {
                let proj = Projector {
                    mvp: view_proj * model,
                    rect,
                    px_per_unit,
                };
                for (layer, mat) in l.materials.iter().enumerate() {
                    if mat.opacity >= MIN_VISIBLE_OPACITY {
                        paint_lines(painter, &proj, l, mat, layer);
                    }
                }
            }
        }
    }
}

fn paint_points(painter: &egui::Painter, proj: &Projector, points: &PointsNode, mat: &Material) {
    for (i, &pos) in points.positions.iter().enumerate() {
        let Some((center, unit_px)) = proj.project(pos) else {
            continue;
        };
        let size = points.sizes.get(i).copied().unwrap_or(points.size);
        let radius = (size * POINT_SCALE * unit_px).clamp(0.4, 6.0);
        let color = points.colors.get(i).copied().unwrap_or(mat.color);
        painter.circle_filled(center, radius, tint(color, mat));
    }
}

fn paint_lines(
    painter: &egui::Painter,
    proj: &Projector,
    lines: &LinesNode,
    mat: &Material,
    layer: usize,
) {
    let width = lines.width * (1.0 + layer as f32);
    let stroke = Stroke::new(width, tint(mat.color, mat));
    for seg in &lines.segments {
        let (Some((a, _)), Some((b, _))) = (proj.project(seg[0]), proj.project(seg[1])) else {
            continue;
        };
        painter.line_segment([a, b], stroke);
    }
}

fn tint(color: [f32; 3], mat: &Material) -> Color32 {
    // The painter has no additive blend; boost glow materials' alpha instead
    let boost = if mat.additive { 1.2 } else { 1.0 };
    let a = (mat.opacity * boost).clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (a * 255.0) as u8,
    )
}
