use wikirag_client::app::App;
use wikirag_client::util::{config::AppConfig, log};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = AppConfig::load()?;
    log::init(&config.log_dir)?;

    let app = App::new(config)?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
