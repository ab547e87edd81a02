use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use clap::Parser;
use engine_logging::{engine_info, engine_warn};
use interning_core::{update, AppState, KeyValueStore, Msg};
use interning_engine::{parse_source_url, EngineEvent, EngineHandle, FileStore, LevelsTable};

use super::cli::Cli;
use super::config::AppConfig;
use super::effects::{EffectRunner, RefreshLauncher};
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::render;

/// Everything the update loop reacts to, in arrival order.
enum AppInput {
    Line(String),
    InputClosed,
    Engine(EngineEvent),
}

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?.apply_cli(&cli);
    logging::initialize(&config);

    let source_url = config
        .source_url
        .clone()
        .context("no source_url configured; pass --source-url or set it in the config file")?;
    parse_source_url(&source_url).context("invalid source_url")?;

    let levels = load_levels(&config);
    let store = FileStore::open(&config.state_dir);
    engine_info!(
        "Starting with source {} and storage {:?}",
        source_url,
        store.path()
    );

    let (input_tx, input_rx) = mpsc::channel::<AppInput>();
    let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
    let engine = EngineHandle::new(config.fetch_settings(), source_url, event_tx);

    let engine_input = input_tx.clone();
    thread::spawn(move || {
        for event in event_rx {
            if engine_input.send(AppInput::Engine(event)).is_err() {
                break;
            }
        }
    });

    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(AppInput::Line(line)).is_err() {
                return;
            }
        }
        let _ = input_tx.send(AppInput::InputClosed);
    });

    let mut app = App {
        state: AppState::new(),
        runner: EffectRunner::new(store, engine),
        levels,
        colored: io::stdout().is_terminal(),
    };
    let restore = app.runner.restore_settings();
    app.dispatch(restore);
    app.dispatch(Msg::RefreshRequested);
    app.print(HELP);

    for input in input_rx {
        match input {
            AppInput::Line(line) => match parse_command(&line) {
                Command::Dispatch(msg) => match unmatched_edit(&app.state, &msg) {
                    Some(notice) => app.print(&notice),
                    None => app.dispatch(msg),
                },
                Command::Show => app.redraw(),
                Command::Help => app.print(HELP),
                Command::Quit => break,
                Command::Invalid(reason) => app.print(&reason),
            },
            AppInput::Engine(event) => {
                if let Some(msg) = app.runner.translate(event) {
                    app.dispatch(msg);
                }
            }
            AppInput::InputClosed => break,
        }
    }

    engine_info!("Shutting down");
    Ok(())
}

fn load_levels(config: &AppConfig) -> LevelsTable {
    let Some(path) = &config.levels_path else {
        return LevelsTable::default();
    };
    match LevelsTable::load(path) {
        Ok(table) => {
            engine_info!("Loaded {} compensation links from {:?}", table.len(), path);
            table
        }
        Err(err) => {
            engine_warn!("Compensation links unavailable: {}", err);
            LevelsTable::default()
        }
    }
}

/// Notice for an applied or status edit that would match no company.
fn unmatched_edit(state: &AppState, msg: &Msg) -> Option<String> {
    let company = match msg {
        Msg::AppliedChanged { company, .. } | Msg::StatusChanged { company, .. } => company,
        _ => return None,
    };
    if state.companies().is_none() {
        return Some("The list is still loading; try again once it is shown.".to_string());
    }
    match state.find_company(company) {
        Some(_) => None,
        None => Some(format!("No company named {company:?}.")),
    }
}

struct App<S, L> {
    state: AppState,
    runner: EffectRunner<S, L>,
    levels: LevelsTable,
    colored: bool,
}

impl<S: KeyValueStore, L: RefreshLauncher> App<S, L> {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.runner.run(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.redraw();
        }
    }

    fn redraw(&self) {
        self.print(&render(&self.state.view(), &self.levels, self.colored));
    }

    fn print(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{text}");
        let _ = write!(stdout, "> ");
        let _ = stdout.flush();
    }
}
