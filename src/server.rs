//! Actix-Web server bootstrap.

use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware, web};

use crate::models::config::ServerConfig;
use crate::repository::{InMemoryUserRepository, SharedUserReader};
use crate::routes::api::api_v1_users;

/// Registers the search API on an application or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").service(api_v1_users));
}

/// Builds the HTTP server on an already bound listener without starting it.
pub fn build_server(
    listener: TcpListener,
    repo: Arc<SharedUserReader>,
    server_config: ServerConfig,
) -> std::io::Result<Server> {
    let repo = web::Data::from(repo);
    let server_config = web::Data::new(server_config);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure)
            .app_data(repo.clone())
            .app_data(server_config.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}

/// Loads the dataset and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // The dataset is read once; every worker shares the same allocation.
    let repo = InMemoryUserRepository::from_csv_path(&server_config.dataset_path)
        .map_err(|e| std::io::Error::other(format!("Failed to load dataset: {e}")))?;
    if repo.is_empty() {
        log::warn!("Dataset {} has no users", server_config.dataset_path);
    }

    let listener = TcpListener::bind((server_config.address.as_str(), server_config.port))?;
    log::info!("Listening on {}", listener.local_addr()?);

    build_server(listener, Arc::new(repo), server_config)?.await
}
