mod config;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use client_core::{
    render::render_notification, ElementId, EventOutcome, FinderController, FixedGeolocation,
    GeolocationProvider, HttpPlacesBackend, MissingGeolocation, Position, UiEvent,
};

use crate::config::{load_settings, DEFAULT_CONFIG_FILE};

#[derive(Parser, Debug)]
#[command(name = "travel_finder", about = "Find travel places around a location")]
struct Args {
    /// Overrides the server URL from the config file and environment.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Print the session as JSON instead of rendered markup.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a position into an address.
    Locate {
        #[arg(long, requires = "lng", allow_hyphen_values = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lng: Option<f64>,
    },
    /// Search places around the given coordinates.
    Search {
        #[arg(long, allow_hyphen_values = true)]
        lat: String,
        #[arg(long, allow_hyphen_values = true)]
        lng: String,
        /// Radius in kilometers.
        #[arg(long)]
        radius: Option<String>,
        #[arg(long)]
        place_type: Option<String>,
    },
    /// List the place types offered by the server.
    Types,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(&args.config)?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }
    tracing::info!(server_url = %settings.server_url, "using places server");

    let backend = Arc::new(HttpPlacesBackend::new(&settings.server_url)?);
    let geolocation: Arc<dyn GeolocationProvider> = match &args.command {
        Command::Locate {
            lat: Some(lat),
            lng: Some(lng),
        } => Arc::new(FixedGeolocation::new(Position::new(*lat, *lng))),
        _ => Arc::new(MissingGeolocation),
    };
    let mut controller =
        FinderController::new_with_dependencies(backend, geolocation, settings.controller_config());
    controller.handle_event(UiEvent::Initialize).await;

    let outcome = match args.command {
        Command::Locate { .. } => controller.handle_event(UiEvent::LocateRequested).await,
        Command::Search {
            lat,
            lng,
            radius,
            place_type,
        } => {
            let mut inputs = vec![
                (ElementId::Latitude, lat),
                (ElementId::Longitude, lng),
            ];
            inputs.extend(radius.map(|value| (ElementId::Radius, value)));
            inputs.extend(place_type.map(|value| (ElementId::PlaceType, value)));
            for (target, value) in inputs {
                controller
                    .handle_event(UiEvent::FieldInput { target, value })
                    .await;
            }
            controller.handle_event(UiEvent::SearchRequested).await
        }
        Command::Types => {
            for option in controller.document().options(ElementId::PlaceType) {
                println!("{}\t{}", option.value, option.label);
            }
            return Ok(ExitCode::SUCCESS);
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(controller.session())?);
    } else {
        print_document(&controller);
    }

    Ok(match outcome {
        EventOutcome::Failed(_) => ExitCode::FAILURE,
        EventOutcome::Handled | EventOutcome::Ignored => ExitCode::SUCCESS,
    })
}

fn print_document(controller: &FinderController) {
    let document = controller.document();
    for notification in controller.active_notifications(Utc::now()) {
        println!("{}", render_notification(notification));
    }
    if document.is_visible(ElementId::LocationInfo) {
        println!("address: {}", document.text(ElementId::CurrentAddress));
    }
    if document.is_visible(ElementId::ResultsCard) {
        println!("{}", document.inner_html(ElementId::PlacesList));
        println!(
            "map markup: {} bytes",
            document.inner_html(ElementId::Map).len()
        );
    }
}
