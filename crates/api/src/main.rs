use anyhow::Context;

use debtdesk_api::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    debtdesk_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        utc_offset = %config.utc_offset,
        fine_rate = %config.policy.fine_rate(),
        monthly_interest_rate = %config.policy.monthly_interest_rate(),
        "starting debtdesk api"
    );

    let app = debtdesk_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
