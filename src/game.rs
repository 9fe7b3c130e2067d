//! Fixed-rate game loop with a flat `Playing | GameOver` dispatch.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::assets::AssetProvider;
use crate::clock::Clock;
use crate::compute::{init_state, restart, steer, tick};
use crate::entities::{GameState, GameStatus};
use crate::input::{HeldDirections, InputSource, Key};
use crate::render::{render_game_over, render_playing, Renderer};
use crate::settings::TICKS_PER_SECOND;

pub const FRAME: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND); // ≈60 FPS

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One tick of the loop at clock reading `now`: read input, advance the
/// simulation, draw the frame.  Returns the next state and whether to keep
/// going.
pub fn frame<I, R>(
    state: &GameState,
    now: u64,
    input: &mut I,
    renderer: &mut R,
    assets: &AssetProvider,
    rng: &mut impl Rng,
) -> io::Result<(GameState, Flow)>
where
    I: InputSource,
    R: Renderer,
{
    let polled = input.poll_events();

    match state.status {
        GameStatus::Playing => {
            if polled.quit || polled.key_pressed == Some(Key::Escape) {
                return Ok((state.clone(), Flow::Quit));
            }

            let held = HeldDirections::sample(&*input);
            let next = tick(&steer(state, &held), now, rng);

            if next.status == GameStatus::GameOver {
                info!(score = next.score, best_score = next.best_score, "game over");
                render_game_over(renderer, &next)?;
            } else {
                render_playing(renderer, assets, &next)?;
            }
            Ok((next, Flow::Continue))
        }
        GameStatus::GameOver => match polled.key_pressed {
            _ if polled.quit => Ok((state.clone(), Flow::Quit)),
            Some(Key::Escape) | Some(Key::Q) => Ok((state.clone(), Flow::Quit)),
            Some(Key::Space) => {
                let next = restart(state, now, rng);
                render_playing(renderer, assets, &next)?;
                Ok((next, Flow::Continue))
            }
            _ => {
                render_game_over(renderer, state)?;
                Ok((state.clone(), Flow::Continue))
            }
        },
    }
}

/// Run until the player quits.  Returns the best score of the session.
pub fn run<I, R, C>(
    input: &mut I,
    renderer: &mut R,
    clock: &C,
    assets: &AssetProvider,
    rng: &mut impl Rng,
) -> io::Result<u32>
where
    I: InputSource,
    R: Renderer,
    C: Clock,
{
    let mut state = init_state(0, clock.now_millis(), rng);
    info!("game started");

    loop {
        let frame_start = Instant::now();

        let (next, flow) = frame(&state, clock.now_millis(), input, renderer, assets, rng)?;
        state = next;
        if flow == Flow::Quit {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    Ok(state.best_score.max(state.score))
}
