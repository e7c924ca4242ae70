use actix_web::{
    middleware::{self, Condition},
    App, HttpServer,
};
use clap::Parser;
use std::{io, process};

use crate::{
    config::{Cli, ConfigError},
    state::AppState,
};

mod auth;
mod config;
mod error;
mod handlers;
mod routes;
mod state;

// Startup misconfiguration is unrecoverable, nothing has been served yet
fn crash_startup(reason: ConfigError) -> ! {
    log::error!("Startup failed: {}", reason);

    process::exit(1);
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // A missing .env file is fine, the variables may come from the real environment
    let _ = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let state = AppState::from_cli(&args).unwrap_or_else(|e| crash_startup(e));

    log::info!(
        "starting HTTP server on {}:{} [Resources: {}]",
        args.address,
        args.port,
        args.resources.join(", ")
    );

    let log_http = args.log_http;

    HttpServer::new(move || {
        let state = state.clone();

        App::new()
            .configure(move |cfg| routes::configure(cfg, &state))
            .wrap(Condition::new(log_http, middleware::Logger::default()))
    })
    .workers(args.http_workers)
    .bind((args.address, args.port))?
    .run()
    .await
}
