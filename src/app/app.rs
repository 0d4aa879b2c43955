use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tracing::debug;

use crate::{
    app::ui,
    errors::ReportError,
    report::{CurrencyFormat, ReportView},
};

pub struct App {
    report: Option<ReportView>,
    alert: Option<String>,
    format: CurrencyFormat,
    table_state: TableState,
}

impl App {
    /// A failed render leaves nothing on screen but the alert.
    pub fn new(rendered: Result<ReportView, ReportError>, format: CurrencyFormat) -> Self {
        let (report, alert) = match rendered {
            Ok(report) => (Some(report), None),
            Err(err) => (None, Some(err.to_string())),
        };

        Self {
            report,
            alert,
            format,
            table_state: TableState::default(),
        }
    }

    pub fn report(&self) -> Option<&ReportView> {
        self.report.as_ref()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|frame| {
            ui::render(
                frame,
                self.report.as_ref(),
                &mut self.table_state,
                self.alert.as_deref(),
                &self.format,
            )
        })?;

        Ok(())
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if !self.handle_key(key.code) {
                    return Ok(());
                }
            }
        }
    }

    /// Applies a key press. Returns `false` once the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.alert.is_some() {
            debug!("Alert dismissed, exiting");
            return false;
        }

        let row_count = self.report.as_ref().map_or(0, |r| r.rows().len());

        match code {
            KeyCode::Char('q') => return false,
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down => {
                if row_count > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i >= row_count - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                if row_count > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                row_count - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            _ => {}
        }

        true
    }
}
