use raylib::prelude::*;

use crate::constants::{TOAST_SLIDE, TOAST_VISIBLE};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ToastKind {
    Success,
    Error,
}

struct Toast {
    message: String,
    kind: ToastKind,
    age: f32,
}

const TOAST_LIFETIME: f32 = TOAST_SLIDE + TOAST_VISIBLE + TOAST_SLIDE;

/// Toast overlay: each notification slides in, stays visible, slides out
/// and is dropped. Collaborates with nothing; callers push, the loop ticks.
#[derive(Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.toasts.push(Toast {
            message: message.into(),
            kind,
            age: 0.0,
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn update(&mut self, dt: f32) {
        for toast in &mut self.toasts {
            toast.age += dt;
        }
        self.toasts.retain(|t| t.age < TOAST_LIFETIME);
    }

    // 0.0 = fully off-screen right, 1.0 = resting position.
    fn slide_factor(age: f32) -> f32 {
        if age < TOAST_SLIDE {
            age / TOAST_SLIDE
        } else if age > TOAST_SLIDE + TOAST_VISIBLE {
            ((TOAST_LIFETIME - age) / TOAST_SLIDE).max(0.0)
        } else {
            1.0
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, screen_width: i32) {
        const WIDTH: i32 = 340;
        const HEIGHT: i32 = 44;
        for (row, toast) in self.toasts.iter().enumerate() {
            let factor = Self::slide_factor(toast.age);
            let x = screen_width - (factor * (WIDTH + 20) as f32) as i32;
            let y = 80 + row as i32 * (HEIGHT + 10);
            let tint = match toast.kind {
                ToastKind::Success => Color::new(0, 140, 160, 230),
                ToastKind::Error => Color::new(170, 40, 90, 230),
            };
            d.draw_rectangle(x, y, WIDTH, HEIGHT, tint);
            d.draw_text(&toast.message, x + 14, y + 13, 18, Color::RAYWHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_its_lifetime() {
        let mut notifier = Notifier::new();
        notifier.push("saved", ToastKind::Success);
        notifier.update(TOAST_LIFETIME - 0.1);
        assert_eq!(notifier.len(), 1);
        notifier.update(0.2);
        assert!(notifier.is_empty());
    }

    #[test]
    fn slide_factor_covers_all_three_phases() {
        assert_eq!(Notifier::slide_factor(0.0), 0.0);
        assert_eq!(Notifier::slide_factor(TOAST_SLIDE + 0.1), 1.0);
        assert!(Notifier::slide_factor(TOAST_LIFETIME - 0.01) < 0.2);
    }

    #[test]
    fn toasts_stack_independently() {
        let mut notifier = Notifier::new();
        notifier.push("first", ToastKind::Success);
        notifier.update(1.0);
        notifier.push("second", ToastKind::Error);
        assert_eq!(notifier.len(), 2);
        notifier.update(TOAST_LIFETIME - 1.0);
        // Only the younger toast survives.
        assert_eq!(notifier.len(), 1);
    }
}
