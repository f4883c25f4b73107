use clap::Parser;
use gov_updates::config::api_base;
use gov_updates::{
    update_channel, BillPoller, BillSource, Config, Dispatcher, ExecutiveOrderPoller,
    ExecutiveOrderSource, Fetcher, SubscriberSet, TelegramMessenger,
};
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::parse();
    config.validate()?;

    info!("Starting gov-updates for congress session {}", config.session);
    if config.chats.is_empty() {
        warn!("No chats configured, updates will only be logged");
    }

    let fetch_config = config.fetch_config();
    let fetcher = Fetcher::new(&fetch_config)?;
    let session = config.session_name();

    let orders = ExecutiveOrderSource::new(fetcher.clone(), api_base(&config.federal_register_api)?)
        .with_president(config.president.clone());
    let propublica = api_base(&config.propublica_api)?;
    let bills = vec![
        BillSource::senate(fetcher.clone(), propublica.clone(), &config.congress_key, &session),
        BillSource::house(fetcher, propublica, &config.congress_key, &session),
    ];

    let messenger = TelegramMessenger::new(&fetch_config, api_base(&config.telegram_api)?, &config.token)?;
    let dispatcher = Dispatcher::new(Arc::new(messenger), SubscriberSet::new(config.chats.clone()));

    let (sender, receiver) = update_channel(config.channel_capacity);
    let tasks = vec![
        tokio::spawn(
            ExecutiveOrderPoller::new(orders, config.cursor_policy, config.order_interval())
                .run(sender.clone()),
        ),
        tokio::spawn(BillPoller::new(bills, config.cursor_policy, config.bill_interval()).run(sender)),
        tokio::spawn(dispatcher.run(receiver)),
    ];

    shutdown_signal().await?;
    info!("Shutdown signal received, stopping pollers and dispatcher");

    for task in tasks {
        task.abort();
    }

    info!("Safe exit");
    Ok(())
}

#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => result,
        _ = terminate.recv() => Ok(()),
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}
