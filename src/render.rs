use raylib::prelude::*;

use crate::deck::{MissingPart, MountReport, SlideDeck};

/// Fixed stage geometry: the hover-sensitive wrapper, the arrow boxes and
/// the indicator dot row. Input hit-testing and drawing share these rects
/// so the two layers can never disagree about where a control is.
pub struct Stage {
    pub wrapper: Rectangle,
    pub prev_arrow: Rectangle,
    pub next_arrow: Rectangle,
    pub dots: Vec<Rectangle>,
}

impl Stage {
    pub fn new(width: i32, height: i32, slide_count: usize) -> Self {
        let w = width as f32;
        let h = height as f32;
        let wrapper = Rectangle::new(0.0, 0.0, w, h - 60.0);

        let arrow_size = Vector2::new(48.0, 64.0);
        let arrow_y = (wrapper.height - arrow_size.y) / 2.0;
        let prev_arrow = Rectangle::new(24.0, arrow_y, arrow_size.x, arrow_size.y);
        let next_arrow = Rectangle::new(w - 24.0 - arrow_size.x, arrow_y, arrow_size.x, arrow_size.y);

        let dot = 16.0;
        let spacing = 28.0;
        let row_width = slide_count as f32 * dot + (slide_count.saturating_sub(1)) as f32 * (spacing - dot);
        let mut dots = Vec::with_capacity(slide_count);
        for i in 0..slide_count {
            dots.push(Rectangle::new(
                (w - row_width) / 2.0 + i as f32 * spacing,
                wrapper.height - 40.0,
                dot,
                dot,
            ));
        }

        Self {
            wrapper,
            prev_arrow,
            next_arrow,
            dots,
        }
    }

    pub fn dot_at(&self, point: Vector2) -> Option<usize> {
        self.dots
            .iter()
            .position(|dot| dot.check_collision_point_rec(point))
    }
}

pub fn draw_deck(
    d: &mut RaylibDrawHandle,
    stage: &Stage,
    deck: &SlideDeck,
    backgrounds: &[Option<Texture2D>],
    report: &MountReport,
) {
    let Some(slide) = deck.current_slide() else {
        // Idle deck: nothing to project.
        return;
    };

    if let Some(Some(texture)) = backgrounds.get(deck.current_index()) {
        draw_cover(d, texture, stage.wrapper);
        // Darken so the text stays readable over any image.
        d.draw_rectangle_rec(stage.wrapper, Color::new(8, 10, 24, 170));
    }

    let center_x = (stage.wrapper.width / 2.0) as i32;
    let headline_size = 48;
    let headline_width = d.measure_text(&slide.headline, headline_size);
    d.draw_text(
        &slide.headline,
        center_x - headline_width / 2,
        (stage.wrapper.height * 0.30) as i32,
        headline_size,
        Color::RAYWHITE,
    );

    if let Some(tagline) = &slide.tagline {
        let tagline_width = d.measure_text(tagline, 24);
        d.draw_text(
            tagline,
            center_x - tagline_width / 2,
            (stage.wrapper.height * 0.30) as i32 + headline_size + 16,
            24,
            Color::new(170, 180, 200, 255),
        );
    }

    // Stat displays in a centered row, counter value above its label.
    if !slide.stats.is_empty() {
        let column = 220.0;
        let row_width = column * slide.stats.len() as f32;
        let base_x = (stage.wrapper.width - row_width) / 2.0;
        let base_y = (stage.wrapper.height * 0.62) as i32;
        for (i, stat) in slide.stats.iter().enumerate() {
            let cx = (base_x + column * i as f32 + column / 2.0) as i32;
            let value = stat.counter.text();
            let value_width = d.measure_text(&value, 40);
            d.draw_text(&value, cx - value_width / 2, base_y, 40, Color::new(0, 242, 255, 255));
            let label_width = d.measure_text(&stat.label, 20);
            d.draw_text(
                &stat.label,
                cx - label_width / 2,
                base_y + 48,
                20,
                Color::new(170, 180, 200, 255),
            );
        }
    }

    if !report.is_missing(MissingPart::PrevControl) {
        draw_arrow(d, stage.prev_arrow, "<");
    }
    if !report.is_missing(MissingPart::NextControl) {
        draw_arrow(d, stage.next_arrow, ">");
    }

    if !report.is_missing(MissingPart::Indicators) {
        for (i, dot) in stage.dots.iter().enumerate() {
            let center = Vector2::new(dot.x + dot.width / 2.0, dot.y + dot.height / 2.0);
            if i == deck.current_index() {
                d.draw_circle_v(center, dot.width / 2.0, Color::new(0, 242, 255, 255));
            } else {
                d.draw_circle_v(center, dot.width / 3.0, Color::new(120, 130, 150, 200));
            }
        }
    }
}

fn draw_arrow(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: &str) {
    d.draw_rectangle_rec(rect, Color::new(255, 255, 255, 30));
    let width = d.measure_text(glyph, 40);
    d.draw_text(
        glyph,
        (rect.x + rect.width / 2.0) as i32 - width / 2,
        (rect.y + rect.height / 2.0) as i32 - 20,
        40,
        Color::RAYWHITE,
    );
}

// Scale-to-cover: fill the target rect, cropping whatever overflows.
fn draw_cover(d: &mut RaylibDrawHandle, texture: &Texture2D, target: Rectangle) {
    let tex_w = texture.width() as f32;
    let tex_h = texture.height() as f32;
    let scale = (target.width / tex_w).max(target.height / tex_h);
    let src_w = target.width / scale;
    let src_h = target.height / scale;
    let source = Rectangle::new((tex_w - src_w) / 2.0, (tex_h - src_h) / 2.0, src_w, src_h);
    d.draw_texture_pro(
        texture,
        source,
        target,
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );
}
