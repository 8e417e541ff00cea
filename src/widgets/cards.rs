//! Scene text cards - the egui rendition of the original section panels.
//!
//! Cards render purely from [`CardState`] (visible/opacity/offset); all
//! animation decisions happen in the director's timeline. During a
//! transition two cards are typically on screen at once, crossfading.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect};

use crate::scene::defs::CardSide;
use crate::scene::{CardState, Scene, Stage};

const ACCENT: Color32 = Color32::from_rgb(0xff, 0x3c, 0x00);
const INK: Color32 = Color32::from_rgb(0xf2, 0xf2, 0xf2);

/// Rough line width for the description block, in characters.
const WRAP_COLS: usize = 42;

pub fn ui(ui: &mut egui::Ui, stage: &Stage) {
    let rect = ui.max_rect();
    for (index, scene) in stage.scenes.iter().enumerate() {
        if let Some(card) = scene.card {
            if card.visible && card.opacity > 0.004 {
                draw_card(ui.painter(), rect, scene, index, card);
            }
        }
    }
}

fn draw_card(painter: &egui::Painter, rect: Rect, scene: &Scene, index: usize, card: CardState) {
    let alpha = card.opacity.clamp(0.0, 1.0);
    let margin = rect.width() * 0.08;
    let x = match scene.spec.side {
        CardSide::Left => rect.left() + margin,
        CardSide::Right => rect.right() - margin - 420.0,
    };
    let mut y = rect.center().y - 110.0 + card.offset_y;

    painter.text(
        Pos2::new(x, y),
        Align2::LEFT_TOP,
        scene.spec.number_line(index),
        FontId::monospace(13.0),
        INK.gamma_multiply(alpha * 0.6),
    );
    y += 28.0;

    for line in scene.spec.title.lines() {
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_TOP,
            line,
            FontId::proportional(54.0),
            INK.gamma_multiply(alpha),
        );
        y += 58.0;
    }
    y += 10.0;

    for line in wrap(scene.spec.description, WRAP_COLS) {
        painter.text(
            Pos2::new(x, y),
            Align2::LEFT_TOP,
            line,
            FontId::monospace(13.0),
            INK.gamma_multiply(alpha * 0.8),
        );
        y += 18.0;
    }
    y += 14.0;

    painter.rect_filled(
        Rect::from_min_size(Pos2::new(x, y), egui::vec2(60.0, 3.0)),
        0.0,
        ACCENT.gamma_multiply(alpha),
    );
}

/// Greedy word wrap for the short uppercase description strings.
fn wrap(text: &str, cols: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > cols {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_respects_column_limit() {
        let lines = wrap("REALITY FRAGMENTED. PARTICLES IN SUPERPOSITION. OBSERVATION ALTERS STATE.", 42);
        assert!(lines.len() >= 2);
        for line in &lines {
            assert!(line.len() <= 42, "line too long: {line}");
        }
    }

    #[test]
    fn test_wrap_keeps_overlong_word_whole() {
        let lines = wrap("ELECTROMAGNETIC-INTERDIMENSIONAL-ANOMALY", 10);
        assert_eq!(lines.len(), 1);
    }
}
