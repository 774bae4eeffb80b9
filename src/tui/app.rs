//! Main TUI application.

use std::io;
use std::sync::mpsc::Receiver;
use std::time::Instant;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing::{debug, error, info};

use crate::collector::MetricsProvider;
use crate::config::DashboardConfig;
use crate::model::Sample;
use crate::sampler::Sampler;
use crate::trend::CpuTrends;
use crate::view::project;

use super::event::{Event, EventHandler, next_before};
use super::input::map_key;
use super::render::render;
use super::state::{Action, Input, ViewState, transition};

/// Main TUI application.
pub struct App<P: MetricsProvider> {
    sampler: Sampler<P>,
    config: DashboardConfig,
    state: ViewState,
    /// Last successfully sampled value of every category.
    last_sample: Sample,
    trends: CpuTrends,
}

impl<P: MetricsProvider> App<P> {
    pub fn new(provider: P, config: DashboardConfig) -> Self {
        Self {
            sampler: Sampler::new(provider, config.process_limit),
            config,
            state: ViewState::new(),
            last_sample: Sample::default(),
            trends: CpuTrends::default(),
        }
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e);
            }
        };

        let events = EventHandler::new();
        if let Ok(size) = terminal.size() {
            events.push(Event::Resize(size.width, size.height));
        }

        info!(interval = ?self.config.refresh_interval, "dashboard started");
        let result = self.event_loop(&mut terminal, events.receiver());

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        info!("dashboard stopped");
        result
    }

    fn event_loop<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &Receiver<Event>,
    ) -> io::Result<()> {
        // First tick fires immediately.
        let mut deadline = Instant::now();

        loop {
            let document = self.state.document();
            terminal.draw(|frame| render(frame, &document))?;

            let input = match next_before(events, deadline) {
                Ok(Event::Tick) => Input::Tick,
                Ok(Event::Key(key)) => map_key(key),
                Ok(Event::Resize(w, h)) => Input::Resize(w, h),
                Err(_) => return Ok(()),
            };

            let (state, action) = transition(std::mem::take(&mut self.state), input);
            self.state = state;

            match action {
                Action::None => {}
                Action::Sample => {
                    self.tick();
                    deadline = Instant::now() + self.config.refresh_interval;
                }
                Action::Quit => return Ok(()),
            }
        }
    }

    /// Samples, merges into the last good sample, and re-projects every tab.
    fn tick(&mut self) {
        let started = Instant::now();
        let report = self.sampler.sample();
        let errors = report.merge_into(&mut self.last_sample, &mut self.trends);
        for e in &errors {
            error!(error = %e, "sampling failed");
        }

        let projections = project(&self.last_sample, &self.trends, &self.config);
        self.state = std::mem::take(&mut self.state).apply_tick(projections, &errors);
        debug!(elapsed = ?started.elapsed(), errors = errors.len(), "tick");
    }
}
