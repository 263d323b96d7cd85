use eframe::CreationContext;
use feedback_uploader::upload::{Dispatcher, HttpEndpoint};
use feedback_uploader::{Config, FeedbackUploader};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("feedback_uploader=info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(url = %config.upload_url, field = %config.field_name, "loaded configuration");

    let endpoint = HttpEndpoint::new(&config)?;
    let dispatcher = Dispatcher::new(Arc::new(endpoint));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([720.0, 720.0])
            .with_min_inner_size([420.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Feedback Theme Extractor",
        options,
        Box::new(move |_cc: &CreationContext| Box::new(FeedbackUploader::new(dispatcher))),
    )?;

    Ok(())
}
