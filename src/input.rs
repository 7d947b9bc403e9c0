use raylib::prelude::*;

use crate::deck::{MissingPart, MountReport};
use crate::render::Stage;

/// One frame's worth of user intent, decoupled from both raylib and the
/// deck so the command stream is inspectable.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DeckCommand {
    Next,
    Previous,
    Advance(i32), // external surface: +1 / -1
    GoTo(usize),  // 0-based, indicator dots
    Jump(usize),  // 1-based, digit keys
    HoverEnter,
    HoverLeave,
    SwipeStart(f32),
    SwipeEnd(f32),
    Submit,
}

const DIGIT_KEYS: [(KeyboardKey, usize); 9] = [
    (KeyboardKey::KEY_ONE, 1),
    (KeyboardKey::KEY_TWO, 2),
    (KeyboardKey::KEY_THREE, 3),
    (KeyboardKey::KEY_FOUR, 4),
    (KeyboardKey::KEY_FIVE, 5),
    (KeyboardKey::KEY_SIX, 6),
    (KeyboardKey::KEY_SEVEN, 7),
    (KeyboardKey::KEY_EIGHT, 8),
    (KeyboardKey::KEY_NINE, 9),
];

/// Polls raylib state and emits deck commands in input order. Keyboard
/// navigation is deliberately global (not scoped to the slider region);
/// pointer paths for absent controls are skipped entirely.
pub fn poll(
    rl: &RaylibHandle,
    stage: &Stage,
    report: &MountReport,
    hovered: &mut bool,
) -> Vec<DeckCommand> {
    let mut commands = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        commands.push(DeckCommand::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        commands.push(DeckCommand::Next);
    }
    for (key, number) in DIGIT_KEYS {
        if rl.is_key_pressed(key) {
            commands.push(DeckCommand::Jump(number));
        }
    }
    if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
        commands.push(DeckCommand::Submit);
    }

    let mouse = rl.get_mouse_position();

    if !report.is_missing(MissingPart::HoverRegion) {
        let inside = stage.wrapper.check_collision_point_rec(mouse);
        if inside != *hovered {
            commands.push(if inside {
                DeckCommand::HoverEnter
            } else {
                DeckCommand::HoverLeave
            });
            *hovered = inside;
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        if !report.is_missing(MissingPart::PrevControl)
            && stage.prev_arrow.check_collision_point_rec(mouse)
        {
            commands.push(DeckCommand::Advance(-1));
        } else if !report.is_missing(MissingPart::NextControl)
            && stage.next_arrow.check_collision_point_rec(mouse)
        {
            commands.push(DeckCommand::Advance(1));
        } else if let Some(dot) = dot_hit(stage, report, mouse) {
            commands.push(DeckCommand::GoTo(dot));
        } else if stage.wrapper.check_collision_point_rec(mouse) {
            // Drag gestures start anywhere in the wrapper.
            commands.push(DeckCommand::SwipeStart(mouse.x));
        }
    }

    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.push(DeckCommand::SwipeEnd(mouse.x));
    }

    commands
}

fn dot_hit(stage: &Stage, report: &MountReport, mouse: Vector2) -> Option<usize> {
    if report.is_missing(MissingPart::Indicators) {
        return None;
    }
    stage.dot_at(mouse)
}
