use std::{env, net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    http::header::{ACCEPT, CONTENT_TYPE, ORIGIN},
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use rand::{rngs::StdRng, SeedableRng};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;

use crate::{
    app::{
        env::Envy,
        store::{self, Store},
        util::time,
    },
    seed::config::SeedOptions,
};

mod app;
mod customers;
mod seed;
mod transactions;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

pub fn router(state: AppState, allowed_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]);

    let routes = Router::new()
        // customers
        .route(
            "/customers",
            get(customers::controller::get_customers).post(customers::controller::create_customer),
        )
        .route(
            "/customers/:id",
            get(customers::controller::get_customer_by_id)
                .put(customers::controller::edit_customer_by_id),
        )
        // transactions
        .route(
            "/customers/:id/transactions",
            get(transactions::controller::get_customer_transactions),
        );

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!("loaded {} environment", envy.app_env);

    // properties
    let port = envy.port.unwrap_or(8080);
    let allowed_origin = envy
        .frontend_url
        .parse::<HeaderValue>()
        .expect("FRONTEND_URL is not a valid origin");

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections.unwrap_or(10))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    store::ensure_schema(&pool)
        .await
        .expect("failed to create database schema");

    // seeding
    if envy.seed_on_start.unwrap_or(true) {
        let options = SeedOptions::from_envy(&envy);
        let mut rng = match envy.seed_rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        tracing::info!(
            customers = options.customers,
            transactions = options.transactions,
            "seeding database"
        );

        if let Err(e) = seed::service::seed(&options, &mut rng, time::current_time(), &pool).await
        {
            tracing::error!(%e);
            panic!("failed to seed database: {}", e);
        }
    }

    let state = AppState {
        store: Arc::new(pool),
    };

    // app
    let app = router(state, allowed_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
