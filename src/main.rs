use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use sommelier::config::Settings;
use sommelier::core::Recommender;
use sommelier::models::ErrorResponse;
use sommelier::routes::{self, AppState};
use sommelier::services::{BrandingStore, ConsultationStore, WineCatalog};
use tracing::{info, error, warn};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug)]
pub struct JsonError(ErrorResponse);

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.0.error, self.0.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(&self.0)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError(ErrorResponse {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    })
    .into()
}

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    info!("Starting Sommelier recommendation service...");

    let catalog = match &settings.catalog.path {
        Some(path) => WineCatalog::load(path).map_err(|e| {
            error!("Failed to load wine catalog: {}", e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?,
        None => {
            warn!("No catalog path configured, serving an empty wine list");
            WineCatalog::empty()
        }
    };

    let branding = BrandingStore::new(settings.branding.clone()).map_err(|e| {
        error!("Invalid branding configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Branding initialized for {}", settings.branding.restaurant_name);

    let sessions = ConsultationStore::new(
        settings.consultation.max_sessions,
        settings.consultation.idle_ttl_secs,
    );

    info!(
        "Consultation store initialized (max: {} sessions, idle TTL: {}s)",
        settings.consultation.max_sessions, settings.consultation.idle_ttl_secs
    );

    let weights = settings.scoring_weights();
    let recommender = Recommender::new(weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let app_state = AppState {
        catalog,
        recommender,
        sessions,
        branding,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
