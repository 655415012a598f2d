mod display;

use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{self, Color, Print},
    terminal,
    ExecutableCommand, QueueableCommand,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::config::GameConfig;
use space_shooter::entities::{Difficulty, InputState, SessionStatus};
use space_shooter::input::HeldKeys;
use space_shooter::session::{FrameOutcome, Session};

use display::{world_viewport, TerminalSurface};

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The game owns the terminal, so logs only go somewhere visible when a log
/// file is configured.  Without one, `RUST_LOG` still applies on stderr.
fn init_logging(config: &GameConfig) -> std::io::Result<()> {
    let default_filter = if config.log_file.is_some() { "info" } else { "off" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start(Difficulty),
    Quit,
}

fn show_menu<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<MenuResult> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let (width, height) = terminal::size()?;
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  SPACE  SHOOTER  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(5),
    ))?;
    out.queue(style::SetForegroundColor(Color::Cyan))?;
    out.queue(Print(title))?;

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy.saturating_sub(3)))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    out.queue(Print("Select difficulty:"))?;

    let options: &[(&str, Difficulty, Color)] = &[
        ("1", Difficulty::Easy, Color::Green),
        ("2", Difficulty::Medium, Color::Yellow),
        ("3", Difficulty::Hard, Color::Red),
    ];

    for (i, (key, difficulty, color)) in options.iter().enumerate() {
        let params = difficulty.params();
        let row = cy.saturating_sub(1) + i as u16;
        out.queue(cursor::MoveTo(cx.saturating_sub(10), row))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!("[{}] ", key)))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(format!("{:<8}", difficulty.as_str())))?;
        out.queue(style::SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(format!(
            " {} rock(s)/s, speed +{}/frame",
            params.obstacles_per_tick, params.speed_increment
        )))?;
    }

    out.queue(cursor::MoveTo(cx.saturating_sub(10), cy + 4))?;
    out.queue(style::SetForegroundColor(Color::DarkGrey))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;

    out.queue(style::ResetColor)?;
    out.flush()?;

    // Block until the user makes a choice
    loop {
        let Ok(ev) = rx.recv() else {
            return Ok(MenuResult::Quit);
        };
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) = ev
        {
            match code {
                KeyCode::Char('1') => return Ok(MenuResult::Start(Difficulty::Easy)),
                KeyCode::Char('2') => return Ok(MenuResult::Start(Difficulty::Medium)),
                KeyCode::Char('3') => return Ok(MenuResult::Start(Difficulty::Hard)),
                _ if is_quit(code, modifiers) => return Ok(MenuResult::Quit),
                _ => {}
            }
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program,  `false` → back to menu.
///
/// Input model: `HeldKeys` stamps every press/repeat with the time it arrived.
/// Each frame the keys still "fresh" (within `HOLD_WINDOW`, measured in time
/// so it holds at any frame rate) become the held directions, so Space and
/// A/D can be used together.  Every Space press or repeat fires once.
///
/// Keyboard-enhancement terminals also send `Release`, which drops the key
/// at once; classic terminals rely on the window expiring.
fn game_loop<W: Write>(
    out: &mut W,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
    frame_time: Duration,
) -> std::io::Result<bool> {
    let mut held: HeldKeys<KeyCode> = HeldKeys::default();
    let mut last = Instant::now();
    let mut scheduled = true;

    loop {
        let frame_start = Instant::now();
        let mut fire = false;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            let ev = match rx.try_recv() {
                Ok(ev) => ev,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(true),
            };
            let Event::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) = ev
            else {
                continue;
            };

            match kind {
                KeyEventKind::Press | KeyEventKind::Repeat => {
                    held.press(code, Instant::now());
                    if is_quit(code, modifiers) {
                        return Ok(true);
                    }
                    match code {
                        KeyCode::Char(' ') => fire = true,
                        KeyCode::Char('r') | KeyCode::Char('R') => {
                            session.new_session();
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Release => {
                    held.release(&code);
                }
            }
        }

        let now = Instant::now();
        let input = InputState {
            left: held.any_held(&LEFT_KEYS, now),
            right: held.any_held(&RIGHT_KEYS, now),
            fire,
        };

        let dt = now - last;
        last = now;

        if scheduled {
            let (cols, rows) = terminal::size()?;
            let mut surface = TerminalSurface::new(out, cols, rows);
            scheduled = session.advance(&input, dt, &mut surface)? == FrameOutcome::Continue;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    let config = GameConfig::from_env()?;
    init_logging(&config)?;
    info!("starting: {:?}", config);

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Ghostty / kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal lacks key-release events, using hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &rx, &config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting with error: {err}");
    }
    result
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(world_viewport(cols, rows), rng);
    let viewport = session.viewport();
    info!(
        "world {}x{} px on a {}x{} terminal",
        viewport.width, viewport.height, cols, rows
    );
    let frame_time = Duration::from_secs(1) / config.fps;
    let mut preselected = config.difficulty;

    loop {
        if session.status() == SessionStatus::Idle {
            let difficulty = match preselected.take() {
                Some(difficulty) => difficulty,
                None => match show_menu(out, rx)? {
                    MenuResult::Start(difficulty) => difficulty,
                    MenuResult::Quit => break,
                },
            };
            session.select_difficulty(difficulty);
        }

        if game_loop(out, &mut session, rx, frame_time)? {
            break;
        }
    }
    Ok(())
}
