// src/main.rs - server-rendered front end for the blog API
mod config;
mod dtos;
mod handlers;
mod models;
mod repositories;
mod services;
mod views;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use reqwest::Client;

use crate::config::AppConfig;
use crate::repositories::post_repository::{PostApi, PostRepository};

pub struct AppState {
    pub api: Arc<dyn PostApi>,
    pub owner: String,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let http_client = match Client::builder().user_agent("blog-front/0.1").build() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to build http client: {}", e);
            std::process::exit(1);
        }
    };

    info!("Blog API: {}", config.api_base_url);
    info!("Blog owner: {}", config.owner);

    let state = web::Data::new(AppState {
        api: Arc::new(PostRepository::new(http_client, &config.api_base_url)),
        owner: config.owner.clone(),
    });

    let bind_address = config.bind_address();
    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&bind_address)?
    .run()
    .await
}
