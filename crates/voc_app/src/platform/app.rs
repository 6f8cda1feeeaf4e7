use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use voc_core::{update, AppState, Msg};
use voc_engine::{new_job_id, EngineHandle};
use voc_logging::voc_info;

use super::effects::EffectRunner;
use super::logging;
use super::ui::focus::{focus_targets, FocusTarget};
use super::ui::input::{map_key, KeyAction};
use super::ui::render;
use crate::cli::Cli;

/// How long to wait for terminal input before checking the engine again.
const FRAME: Duration = Duration::from_millis(75);

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(&cli.log_file, logging::level_for(cli.verbose));

    let engine = EngineHandle::new(cli.api_settings())
        .with_context(|| format!("invalid --api-url {}", cli.api_url))?;
    voc_info!("voc_wizard started against {}", cli.api_url);

    let mut app = App::new(EffectRunner::new(engine));
    let mut term = TerminalGuard::enter()?;
    let result = app.run(term.terminal_mut());
    voc_info!("voc_wizard exiting");
    result
}

struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("enter alt screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("create terminal")?;
        terminal.clear().context("clear terminal")?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

struct App {
    state: AppState,
    runner: EffectRunner,
    focus: usize,
    step: u8,
    needs_render: bool,
    quit: bool,
}

impl App {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let step = state.wizard().step();
        Self {
            state,
            runner,
            focus: 0,
            step,
            needs_render: true,
            quit: false,
        }
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
        while !self.quit {
            if self.needs_render {
                let view = self.state.view();
                let focus = self.focused();
                terminal
                    .draw(|frame| render::draw(frame, &view, focus))
                    .context("draw frame")?;
                self.needs_render = false;
            }

            if event::poll(FRAME).context("poll terminal events")? {
                match event::read().context("read terminal event")? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Resize(..) => self.needs_render = true,
                    _ => {}
                }
            }

            for msg in self.runner.drain() {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    fn focused(&self) -> Option<FocusTarget> {
        focus_targets(&self.state.view()).get(self.focus).copied()
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let view = self.state.view();
        let targets = focus_targets(&view);
        let focus = targets.get(self.focus).copied();
        match map_key(key, &view, focus) {
            KeyAction::Quit => self.quit = true,
            KeyAction::FocusNext => self.move_focus(targets.len(), 1),
            KeyAction::FocusPrev => self.move_focus(targets.len(), targets.len().saturating_sub(1)),
            KeyAction::Dispatch(msg) => self.dispatch(msg),
            KeyAction::RequestScraping => self.dispatch(Msg::ScrapingRequested {
                job_id: new_job_id(),
            }),
            KeyAction::Ignore => {}
        }
    }

    fn move_focus(&mut self, count: usize, step: usize) {
        if count == 0 {
            return;
        }
        self.focus = (self.focus + step) % count;
        self.needs_render = true;
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_render = true;
        }
        self.state = state;
        self.runner.run(effects);

        let step = self.state.wizard().step();
        if step != self.step {
            self.step = step;
            self.focus = 0;
        }
        let count = focus_targets(&self.state.view()).len();
        if self.focus >= count {
            self.focus = count.saturating_sub(1);
        }
    }
}
