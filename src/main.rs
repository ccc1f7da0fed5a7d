use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use bookshelf::modules::books::adapters::outbound::book_repository_in_memory::InMemoryBookRepository;
use bookshelf::shared::infrastructure::clock::system::SystemClock;
use bookshelf::shared::infrastructure::id_generator::uuid_v7::UuidV7IdGenerator;
use bookshelf::shell::config::Config;
use bookshelf::shell::http::router;
use bookshelf::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // Books live only as long as the process.
    let state = AppState::new(
        Arc::new(InMemoryBookRepository::new()),
        Arc::new(UuidV7IdGenerator::new()),
        Arc::new(SystemClock::new()),
    );

    let addr = config.socket_addr().await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Bookshelf API: http://{}/books", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
