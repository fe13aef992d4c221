mod actions;
mod api;
mod app;
mod config;
mod forms;
mod logging;
mod output;
mod request;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = Config::load()?;
    logging::init(&config.log)?;
    log::info!("Starting pizza-tui against {}", config.server.api_url);

    let app = App::new(config)?;

    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
