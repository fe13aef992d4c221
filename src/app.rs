use crate::api::HttpTransport;
use crate::config::Config;
use crate::state::AppState;
use crate::types::InputMode;
use crate::ui;
use crate::ui::draw;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    transport: HttpTransport,
    api_url: String,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.server.accept_invalid_certs)
            .map_err(|e| color_eyre::eyre::eyre!("{e:#}"))?;

        Ok(Self {
            state: Arc::new(RwLock::new(AppState::default())),
            transport,
            api_url: config.server.api_url.clone(),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
            config,
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;

            let url_submitted = self
                .event_handler
                .handle_events(&self.state, &self.transport, &self.api_url)?;

            // If URL was submitted, save it and use it from now on
            if let Some(api_url) = url_submitted {
                self.api_url = api_url.clone();
                self.config.set_api_url(api_url)?;
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };

        // Create main layout: Header, Menu bar, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Menu bar
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[2]);

        draw::render_header(
            frame,
            main_chunks[0],
            &self.api_url,
            &state,
            self.spinner_index,
        );
        draw::render_menu_bar(frame, main_chunks[1], &state);
        draw::render_form_panel(frame, body_chunks[0], &state, &self.api_url);
        draw::render_output_panel(frame, body_chunks[1], &state);
        draw::render_footer(frame, main_chunks[3], &state);

        // Render overlays LAST - after everything else
        if state.menu.open {
            draw::render_menu_dropdown(frame, main_chunks[1], &state);
        }
        if state.input_mode == InputMode::EnteringUrl {
            draw::render_url_input_modal(frame, &state);
        }
    }
}
