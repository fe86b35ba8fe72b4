use anyhow::{bail, Context};
use crossterm::event::{self, Event};
use flappy::core::constants::{
    FRAME_INTERVAL_MS, LOG_FILE, MENU_POLL_MS, PARAMS_FILE,
};
use flappy::core::{FrameOutcome, Playfield, Session, SessionParams};
use flappy::input::{
    is_press, map_menu_key, map_params_key, map_play_key, process_menu_input,
    process_params_input, MenuAction, ParamsAction, PlayInput,
};
use flappy::ui::flappy_scene::TerminalRenderer;
use flappy::ui::menu_scene::MenuScreen;
use flappy::ui::params_scene::ParamsScreen;
use flappy::ui::terminal::{restore_terminal, setup_terminal, BellFeedback, TerminalPreload, Tui};
use flappy::utils::build_info;
use flappy::utils::logging::init_file_logging;
use flappy::utils::persistence;
use flappy::utils::{HighScoreRecord, JsonHighScoreStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

enum Screen {
    Menu,
    Parameters,
    Playing,
}

struct CliOptions {
    params_file: Option<PathBuf>,
    bell: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = parse_args(&args)?;

    let data_dir = match persistence::data_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Warning: {}; using the current directory", e);
            PathBuf::from(".")
        }
    };

    if let Err(e) = init_file_logging(&data_dir.join(LOG_FILE)) {
        eprintln!("Warning: could not open log file: {}", e);
    }
    info!(
        version = build_info::VERSION,
        commit = build_info::BUILD_COMMIT,
        date = build_info::BUILD_DATE,
        "Starting flappy"
    );

    let params_path = data_dir.join(PARAMS_FILE);
    let params = load_params(options.params_file.as_deref(), &params_path)?;

    let store = JsonHighScoreStore::in_dir(&data_dir);
    let mut session = Session::new(params, Playfield::default(), store, StdRng::from_entropy());

    let mut terminal = setup_terminal().context("failed to set up the terminal")?;
    let result = run(&mut terminal, &mut session, &params_path, options.bell);
    restore_terminal(&mut terminal).context("failed to restore the terminal")?;

    if let Some(best) = session.best_score() {
        println!("Best score: {}", best);
    }
    result
}

fn parse_args(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions {
        params_file: None,
        bell: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--params" | "-p" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--params needs a file path");
                };
                options.params_file = Some(PathBuf::from(path));
                i += 1;
            }
            "--bell" => options.bell = true,
            other => bail!("unknown argument: {} (run 'flappy --help' for usage)", other),
        }
        i += 1;
    }

    Ok(options)
}

fn print_help() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  -p, --params <FILE>  Load session parameters from a JSON file");
    println!("      --bell           Ring the terminal bell on score and crash");
    println!("  -v, --version        Show version information");
    println!("  -h, --help           Show this help message");
    println!();
    println!("Logs go to {} in the data directory; set RUST_LOG to change the level.", LOG_FILE);
}

/// An explicit parameter file must be valid. The saved one falls back to
/// defaults when missing or broken.
fn load_params(explicit: Option<&Path>, saved: &Path) -> anyhow::Result<SessionParams> {
    if let Some(path) = explicit {
        let params = SessionParams::load(path)
            .with_context(|| format!("invalid parameter file {}", path.display()))?;
        info!(path = %path.display(), "Loaded parameters");
        return Ok(params);
    }

    if !saved.exists() {
        return Ok(SessionParams::default());
    }
    match SessionParams::load(saved) {
        Ok(params) => Ok(params),
        Err(e) => {
            warn!(error = %e, path = %saved.display(), "Ignoring saved parameters");
            Ok(SessionParams::default())
        }
    }
}

fn run(
    terminal: &mut Tui,
    session: &mut Session<JsonHighScoreStore, StdRng>,
    params_path: &Path,
    bell: bool,
) -> anyhow::Result<()> {
    let epoch = Instant::now();
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut feedback = BellFeedback { enabled: bell };
    let mut preload = TerminalPreload;

    let mut screen = Screen::Menu;
    let mut menu = MenuScreen::new();
    let mut params_screen = ParamsScreen::new(session.params());
    let mut record = load_record(session.store());
    let mut next_frame = Instant::now();

    loop {
        match screen {
            Screen::Menu => {
                let phase = session.phase();
                let best = session.best_score();
                terminal.draw(|f| {
                    let area = f.size();
                    menu.draw(f, area, phase, record.as_ref(), best);
                })?;

                if !event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    continue;
                }
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                if !is_press(&key) {
                    continue;
                }

                match process_menu_input(&mut menu, map_menu_key(key)) {
                    MenuAction::Play => match session.start(epoch.elapsed(), &mut preload) {
                        Ok(()) => {
                            menu.error = None;
                            next_frame = Instant::now();
                            screen = Screen::Playing;
                        }
                        Err(e) => menu.error = Some(e.to_string()),
                    },
                    MenuAction::OpenParameters => {
                        params_screen = ParamsScreen::new(session.params());
                        screen = Screen::Parameters;
                    }
                    MenuAction::Quit => return Ok(()),
                    MenuAction::None => {}
                }
            }

            Screen::Parameters => {
                terminal.draw(|f| {
                    let area = f.size();
                    params_screen.draw(f, area);
                })?;

                if !event::poll(Duration::from_millis(MENU_POLL_MS))? {
                    continue;
                }
                let Event::Key(key) = event::read()? else {
                    continue;
                };
                if !is_press(&key) {
                    continue;
                }

                match process_params_input(&mut params_screen, map_params_key(key)) {
                    ParamsAction::Save(params) => {
                        if let Err(e) = session.set_params(params) {
                            params_screen.validation_error = Some(e.to_string());
                            continue;
                        }
                        if let Err(e) = session.params().save(params_path) {
                            warn!(error = %e, "Could not save parameters");
                        }
                        info!("Parameters updated");
                        screen = Screen::Menu;
                    }
                    ParamsAction::Cancel => screen = Screen::Menu,
                    ParamsAction::None => {}
                }
            }

            Screen::Playing => {
                let wait = next_frame.saturating_duration_since(Instant::now());
                if event::poll(wait)? {
                    if let Event::Key(key) = event::read()? {
                        if is_press(&key) {
                            match map_play_key(key) {
                                PlayInput::Jump => {
                                    session.jump(&mut feedback);
                                }
                                PlayInput::Quit => {
                                    info!(score = session.score(), "Quit mid-round");
                                    return Ok(());
                                }
                                PlayInput::Other => {}
                            }
                        }
                    }
                }

                if Instant::now() < next_frame {
                    continue;
                }
                next_frame += frame_interval;

                let mut renderer = TerminalRenderer::new(terminal);
                let outcome = session.frame(epoch.elapsed(), &mut renderer, &mut feedback);
                if let Some(e) = renderer.error.take() {
                    return Err(e).context("failed to draw frame");
                }

                match outcome {
                    FrameOutcome::Ended { .. } | FrameOutcome::Inactive => {
                        record = load_record(session.store());
                        screen = Screen::Menu;
                    }
                    FrameOutcome::Continue { .. } => {
                        // Skip frames the terminal could not keep up with.
                        let now = Instant::now();
                        if next_frame < now {
                            next_frame = now;
                        }
                    }
                }
            }
        }
    }
}

fn load_record(store: &JsonHighScoreStore) -> Option<HighScoreRecord> {
    store.record().unwrap_or_else(|e| {
        warn!(error = %e, "Could not read best score record");
        None
    })
}
