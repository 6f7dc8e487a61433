use anyhow::{Context, Result, bail};
use spotlight_core::{
    application::{
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::SlugGenerator,
        },
        services::{ApplicationServices, Repositories},
    },
    config::AppConfig,
    infrastructure::{
        database,
        repositories::{
            PostgresAdvertisementRepository, PostgresArticleReadRepository,
            PostgresArticleWriteRepository, PostgresAuthorRepository, PostgresCategoryRepository,
            PostgresCommentRepository, PostgresNewsletterRepository, PostgresVlogRepository,
        },
        security::{Argon2PasswordHasher, BiscuitTokenManager},
        time::SystemClock,
        util::DefaultSlugGenerator,
    },
    presentation::http::{
        flash::FlashSigner,
        openapi,
        routes::{RouterConfig, build_router},
        state::HttpState,
        templates,
    },
};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None | Some("serve") => serve().await,
        Some("openapi-snapshot") => {
            let path = openapi::write_openapi_snapshot()?;
            tracing::info!(%path, "openapi snapshot written");
            Ok(())
        }
        Some("create-admin") => {
            let username = args.next().context("usage: create-admin <username> [password]")?;
            let password = match args.next() {
                Some(password) => password,
                None => std::env::var("ADMIN_PASSWORD")
                    .context("pass the password as an argument or set ADMIN_PASSWORD")?,
            };
            create_admin(username, password).await
        }
        Some(other) => bail!("unknown command `{other}`; expected serve, openapi-snapshot or create-admin"),
    }
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    templates::verify()?;

    let pool = connect(&config).await?;
    let services = Arc::new(application_services(pool, &config)?);

    let state = HttpState {
        services,
        flash: FlashSigner::new(config.flash_secret()),
    };
    let router_config = RouterConfig {
        media_root: config.media_root().clone(),
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit_enabled: config.rate_limit_enabled(),
    };
    let app = build_router(state, &router_config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn create_admin(username: String, password: String) -> Result<()> {
    let config = AppConfig::from_env()?;
    let pool = connect(&config).await?;
    let services = application_services(pool, &config)?;
    let admin = services
        .author_commands
        .bootstrap_admin(username, password)
        .await?;
    tracing::info!(author_id = admin.id, username = %admin.username, "administrator created");
    Ok(())
}

async fn connect(config: &AppConfig) -> Result<PgPool> {
    let pool = database::init_pool(config.database_url(), config.database_max_connections())
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool).await?;
    Ok(pool)
}

fn application_services(pool: PgPool, config: &AppConfig) -> Result<ApplicationServices> {
    let repos = Repositories {
        authors: Arc::new(PostgresAuthorRepository::new(pool.clone())),
        categories: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        vlogs: Arc::new(PostgresVlogRepository::new(pool.clone())),
        advertisements: Arc::new(PostgresAdvertisementRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
        newsletter: Arc::new(PostgresNewsletterRepository::new(pool)),
    };

    let token_manager: Arc<dyn TokenManager> = match config.biscuit_private_key() {
        Some(key) => Arc::new(BiscuitTokenManager::new(key, config.token_ttl())?),
        None => {
            tracing::warn!("BISCUIT_ROOT_PRIVATE_KEY not set; issued tokens will not survive a restart");
            Arc::new(BiscuitTokenManager::ephemeral(config.token_ttl()))
        }
    };
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Ok(ApplicationServices::new(
        repos,
        password_hasher,
        token_manager,
        clock,
        slugger,
    ))
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
            tracing::error!(error = %err, "failed to install CTRL+C handler");
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
