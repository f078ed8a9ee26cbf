use anyhow::Context;

use tokio::net::TcpListener;

use tracing::info;

use crate::{
    config::{self, ServerConfiguration},
    controller,
    service::time_service,
    utils::time,
};

pub async fn run(config_file: String) -> anyhow::Result<()> {
    config::read_configuration(config_file).await?;

    let server_configuration = &config::instance().server_configuration;

    // fail at startup rather than on the first request if the tz database is broken
    let now = time::get_current_time().context("fixed time zone check failed")?;
    info!("current time in {} is {}", time::FIXED_TIME_ZONE, now);

    let time_service = time_service::new_time_service();

    let routes = controller::create_routes(server_configuration, time_service);

    let listener = create_listener(server_configuration).await?;

    axum::serve(listener, routes)
        .await
        .context("axum::serve error")?;

    anyhow::bail!("axum::serve returned without error");
}

async fn create_listener(
    server_configuration: &ServerConfiguration,
) -> anyhow::Result<TcpListener> {
    let tcp_listener = TcpListener::bind(&server_configuration.bind_address)
        .await
        .with_context(|| {
            format!(
                "TCP server bind error address = {:?}",
                server_configuration.bind_address
            )
        })?;

    let local_addr = tcp_listener.local_addr().with_context(|| {
        format!(
            "TCP server local_addr error address = {:?}",
            server_configuration.bind_address
        )
    })?;

    info!("listening on tcp {:?}", local_addr);

    Ok(tcp_listener)
}
