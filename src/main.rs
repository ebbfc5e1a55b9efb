use quiz_backend::{
    app_router,
    config::{get_config, init_config},
    database::{pool::create_pool, schema::init_schema},
    middleware::cors::permissive_cors,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;

    // The tables must exist before the listener binds; a failure here ends
    // the process instead of serving requests against a half-ready store.
    init_schema(&pool).await?;

    let app_state = AppState::new(pool);

    let app = app_router(app_state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
