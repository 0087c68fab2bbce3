use dbpulse::config::Config;
use dbpulse::router::{PulseState, pulse_router, serve};
use dbpulse::{ConnectivityProber, PulseError};
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load().map_err(PulseError::from)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    let key_state = match cfg.database_key.as_deref() {
        Some(k) if !k.trim().is_empty() => "<redacted>",
        _ => "<unset>",
    };
    info!(
        database_url = %cfg.database_url.as_deref().unwrap_or("<unset>"),
        database_key = key_state,
        proxy = %cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        probe_timeout_secs = cfg.probe_timeout().as_secs(),
        loglevel = %cfg.loglevel,
        "configuration loaded"
    );

    // Credential faults degrade `/` instead of aborting startup.
    let prober = ConnectivityProber::from_config(&cfg);

    let state = PulseState::new(prober);
    let app = pulse_router(state);

    serve(&cfg.listen_addr, app).await?;
    Ok(())
}
