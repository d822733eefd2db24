use std::net::TcpListener;

use actix_web::web;
use anyhow::Context;
use env_logger::Env;
use prospect::{
    configuration::get_configuration,
    services::{DashboardState, LeadGenerator},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    let mut generator = LeadGenerator::new();
    let leads = generator.generate(configuration.sample_data.initial_count);
    log::info!("Seeded dashboard with {} sample leads", leads.len());

    let state = web::Data::new(DashboardState::new(leads));

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;

    run(listener, state)?.await.context("Server crashed")
}
