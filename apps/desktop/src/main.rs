use iced::{Application, Settings, Size};
use tracing::info;

mod app;
mod ui;

use app::FolioApp;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("info,folio=debug")
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // Run the application
    FolioApp::run(Settings {
        window: iced::window::Settings {
            size: Size::new(1200.0, 800.0),
            min_size: Some(Size::new(800.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Default::default()
    })?;

    Ok(())
}
