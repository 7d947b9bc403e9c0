use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use herodeck::config::load_manifest;
use herodeck::constants::*;
use herodeck::deck::{change_slide, go_to_slide, SlideDeck};
use herodeck::forms::{FormSubmitter, SubmitOutcome};
use herodeck::input::{self, DeckCommand};
use herodeck::notify::{Notifier, ToastKind};
use herodeck::particles::ParticleField;
use herodeck::render::{draw_deck, Stage};
use herodeck::texture_loader::load_background;

#[derive(Parser)]
#[command(name = "herodeck", about = "Interactive hero-slide deck")]
struct Args {
    /// Path to the deck manifest (TOML)
    manifest: PathBuf,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let manifest = load_manifest(&args.manifest)
        .with_context(|| format!("loading deck manifest {}", args.manifest.display()))?;

    let (mut deck, report) = SlideDeck::mount(&manifest).context("mounting slide deck")?;
    for part in &report.missing {
        // Degraded mode is deliberate: report it, run anyway.
        warn!(?part, "expected page element absent, its input path is disabled");
    }
    info!(slides = deck.len(), "deck mounted");

    let title = manifest.title.as_deref().unwrap_or("herodeck");
    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(title)
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // One optional background texture per slide, loaded up front. A slide
    // whose image fails to load just renders without one.
    let mut backgrounds: Vec<Option<Texture2D>> = Vec::with_capacity(deck.len());
    for spec in &manifest.slides {
        let texture = match &spec.background {
            Some(path) => match load_background(&mut rl, &thread, path) {
                Ok(texture) => Some(texture),
                Err(e) => {
                    warn!(error = %e, "skipping slide background");
                    None
                }
            },
            None => None,
        };
        backgrounds.push(texture);
    }

    let stage = Stage::new(args.width, args.height, deck.len());
    let mut particles = ParticleField::new(args.width as f32, args.height as f32);
    let mut notifier = Notifier::new();
    let mut submitter = FormSubmitter::new();
    let mut hovered = false;

    deck.start();

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        for command in input::poll(&rl, &stage, &report, &mut hovered) {
            apply(command, &mut deck, &mut submitter, &mut notifier);
        }

        deck.tick(dt);
        particles.update(dt);
        notifier.update(dt);
        if let Some(outcome) = submitter.update(dt) {
            match outcome {
                SubmitOutcome::Sent => {
                    notifier.push("Thank you! We'll get back to you soon.", ToastKind::Success)
                }
                SubmitOutcome::Failed => {
                    notifier.push("Something went wrong. Please try again.", ToastKind::Error)
                }
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(8, 10, 24, 255));
        particles.draw(&mut d);
        draw_deck(&mut d, &stage, &deck, &backgrounds, &report);
        notifier.draw(&mut d, args.width);
    }

    deck.stop();
    Ok(())
}

fn apply(
    command: DeckCommand,
    deck: &mut SlideDeck,
    submitter: &mut FormSubmitter,
    notifier: &mut Notifier,
) {
    match command {
        DeckCommand::Next => deck.next(),
        DeckCommand::Previous => deck.previous(),
        DeckCommand::Advance(direction) => change_slide(deck, direction),
        DeckCommand::GoTo(index) => deck.go_to(index),
        DeckCommand::Jump(number) => go_to_slide(deck, number),
        DeckCommand::HoverEnter => deck.hover_enter(),
        DeckCommand::HoverLeave => deck.hover_leave(),
        DeckCommand::SwipeStart(x) => deck.begin_swipe(x),
        DeckCommand::SwipeEnd(x) => deck.end_swipe(x),
        DeckCommand::Submit => {
            if submitter.submit() {
                notifier.push("Sending...", ToastKind::Success);
            }
        }
    }
}
