use caddie::server::{config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState {
        db,
        hole_order_policy: config.hole_order_policy(),
    };

    tracing::info!(
        allow_repeated_holes = state.hole_order_policy.allow_repeated_holes,
        "Database migrated, Caddie core ready"
    );
}
