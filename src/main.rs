use anyhow::Result;
use blogpress_core::application::{
    ports::{ClockPort, MediaStorePort, SlugGeneratorPort},
    services::{ApplicationServices, ArticleSettings},
};
use blogpress_core::config::AppConfig;
use blogpress_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    content::ContentAnalyzer,
};
use blogpress_core::infrastructure::{
    database,
    media::LocalMediaStore,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use blogpress_core::presentation::http::{
    routes::build_router_with_rate_limiter, state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let local_store = LocalMediaStore::new(config.upload_dir().clone()).await?;
    tracing::info!(upload_dir = %local_store.root().display(), "media store ready");
    let media_store: Arc<MediaStorePort> = Arc::new(local_store);
    let analyzer = Arc::new(ContentAnalyzer::new(config.banned_words()));
    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        media_store,
        analyzer,
        clock,
        slugger,
        ArticleSettings {
            keyword_limit: config.keyword_limit(),
        },
    ));

    let content_analyzer = services.content_analyzer();
    let banned_words = content_analyzer.banned_words();
    if banned_words.is_empty() {
        tracing::warn!("BANNED_WORDS is empty; no content will be rejected");
    }
    tracing::info!(
        banned_words = banned_words.len(),
        keyword_limit = config.keyword_limit(),
        "content analyzer ready"
    );

    let state = HttpState {
        services,
        upload_dir: config.upload_dir().clone(),
        max_upload_bytes: config.max_upload_bytes(),
    };

    let app = build_router_with_rate_limiter(state, config.rate_limit_enabled());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    // the rate limiter keys clients by peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
