//! Terminal front end for the strip shooter.
//!
//! Plays the role the LED strip + button hardware plays in a real install:
//! it schedules ticks at a fixed cadence, samples the keyboard once per tick,
//! pushes the render projection to the terminal, and runs the game-over
//! presentation on top of `is_over()`/`reset()` without any game logic of
//! its own.
//!
//! Controls: SPACE fires, R restarts after a game over, Q/ESC quits.

use std::io::{BufWriter, Stdout, Write, stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use strip_blaster::sim::{GameEvent, GameState, TickInput, UniformSpawn, tick};
use strip_blaster::{Config, Palette, Rgb, project};

/// Tick cadence; must stay at or below the projectile step interval.
const FRAME: Duration = Duration::from_millis(10);

/// How long the level-up banner stays on screen.
const BANNER_MS: u64 = 1500;

/// Keyboard samples for one frame.
#[derive(Default)]
struct FrameInput {
    trigger: bool,
    reset: bool,
    quit: bool,
}

/// Drain all pending key events into this frame's samples. Each SPACE press
/// becomes a one-frame trigger pulse; the core's edge detection handles key
/// repeat.
fn sample_input(rx: &mpsc::Receiver<Event>) -> FrameInput {
    let mut input = FrameInput::default();
    while let Ok(Event::Key(KeyEvent {
        code,
        kind,
        modifiers,
        ..
    })) = rx.try_recv()
    {
        if kind == KeyEventKind::Release {
            continue;
        }
        match code {
            KeyCode::Char(' ') => input.trigger = true,
            KeyCode::Char('r') | KeyCode::Char('R') => input.reset = true,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => input.quit = true,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => input.quit = true,
            _ => {}
        }
    }
    input
}

fn to_term_color(c: Rgb) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn draw<W: Write>(
    out: &mut W,
    state: &GameState,
    palette: &Palette,
    banner: Option<&str>,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print("player ▶ "))?;
    for color in project(state, palette) {
        out.queue(SetForegroundColor(to_term_color(color)))?;
        out.queue(Print("██"))?;
    }
    out.queue(ResetColor)?;
    out.queue(Print(" ◀ spawn"))?;

    out.queue(cursor::MoveTo(0, 2))?;
    out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
    if state.is_over() {
        out.queue(SetForegroundColor(Color::Red))?;
        out.queue(Print(format!(
            "GAME OVER — {} kills. Press R to restart, Q to quit.",
            state.difficulty.kill_count()
        )))?;
    } else {
        out.queue(Print(format!(
            "kills {:>3}   level {:>2}   advance {:>4} ms   SPACE fire / Q quit",
            state.difficulty.kill_count(),
            state.difficulty.level(),
            state.difficulty.interval_ms()
        )))?;
        if let Some(text) = banner {
            out.queue(SetForegroundColor(Color::Yellow))?;
            out.queue(Print(format!("   {}", text)))?;
        }
    }
    out.queue(ResetColor)?;
    out.flush()
}

fn run(out: &mut BufWriter<Stdout>, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let palette = Palette::default();
    let mut state = GameState::new(Config::wired_button());
    let mut rng = UniformSpawn::new(rand::rng());

    let start = Instant::now();
    let mut banner: Option<(String, u64)> = None;

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;

        let sampled = sample_input(rx);
        if sampled.quit {
            return Ok(());
        }

        let input = TickInput {
            trigger: sampled.trigger,
            reset: sampled.reset,
        };
        for ev in tick(&mut state, &input, now_ms, &mut rng) {
            match ev {
                GameEvent::LevelUp { level } => {
                    banner = Some((format!("LEVEL {}!", level), now_ms + BANNER_MS));
                }
                GameEvent::GameOver => banner = None,
                GameEvent::ShotFired => {}
            }
        }
        if banner.as_ref().is_some_and(|(_, until)| now_ms >= *until) {
            banner = None;
        }

        draw(out, &state, &palette, banner.as_ref().map(|(t, _)| t.as_str()))?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

fn main() -> std::io::Result<()> {
    env_logger::init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Blocking event reads live on their own thread so the tick loop never
    // waits on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(ev) => {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped, program exiting
                    }
                }
                Err(_) => break,
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
