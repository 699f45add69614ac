use config::{Config, PredictionSource};
use file_picker::impl_rfd::FilePickerRfd;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use plant_id::main::PlantId;
use prediction_service::impl_fallback::PredictionServiceFallback;
use prediction_service::impl_http::PredictionServiceHttp;
use prediction_service::impl_sample::PredictionServiceSample;
use prediction_service::interface::PredictionService;
use preview_store::impl_egui::PreviewStoreEgui;
use std::sync::{Arc, Mutex};

mod components;
mod config;
mod file_picker;
mod image_file;
mod library;
mod plant_id;
mod prediction_service;
mod preview_store;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let _ = logger.info(&format!("Starting with {:?}", config));

    let prediction_service = build_prediction_service(&config, logger.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PlantID")
            .with_inner_size(config.window_size)
            .with_min_inner_size([420.0, 480.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "PlantID",
        options,
        Box::new(move |cc| -> Box<dyn eframe::App> {
            let preview_store = Arc::new(Mutex::new(PreviewStoreEgui::new(
                cc.egui_ctx.clone(),
                logger.clone(),
            )));

            Box::new(PlantId::new(
                cc.egui_ctx.clone(),
                logger,
                prediction_service,
                preview_store,
                Arc::new(FilePickerRfd::new()),
            ))
        }),
    )?;

    Ok(())
}

fn build_prediction_service(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn PredictionService + Send + Sync>, Box<dyn std::error::Error>> {
    let service: Arc<dyn PredictionService + Send + Sync> = match config.prediction_source {
        PredictionSource::Sample => Arc::new(PredictionServiceSample::randomized(
            config.sample_delay,
            logger.clone(),
        )),
        PredictionSource::Http => {
            let http: Arc<dyn PredictionService + Send + Sync> =
                Arc::new(PredictionServiceHttp::new(config, logger.clone())?);
            if config.fallback_to_sample {
                let _ = logger.info("Falling back to sample data when the service fails");
                Arc::new(PredictionServiceFallback::new(
                    http,
                    Arc::new(PredictionServiceSample::new(config.sample_delay, logger.clone())),
                    logger.clone(),
                ))
            } else {
                http
            }
        }
    };

    Ok(service)
}
