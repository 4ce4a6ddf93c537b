//! Helpers for spinning up search servers on ephemeral ports.

use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;

use actix_web::{App, HttpResponse, HttpServer, web};
use reqwest::Url;

use user_search::models::config::ServerConfig;
use user_search::repository::{InMemoryUserRepository, SharedUserReader};

pub const DATASET: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.csv");

fn bind() -> (TcpListener, Url) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind test port");
    let port = listener.local_addr().expect("no local address").port();
    let url = Url::parse(&format!("http://127.0.0.1:{port}/api/v1/users")).expect("valid url");
    (listener, url)
}

/// Starts the real search service backed by the bundled dataset.
pub fn spawn_server(access_token: Option<&str>) -> Url {
    let repo = InMemoryUserRepository::from_csv_path(DATASET).expect("dataset should load");
    let repo: Arc<SharedUserReader> = Arc::new(repo);
    let (listener, url) = bind();

    let server_config = ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        dataset_path: DATASET.to_string(),
        access_token: access_token.map(str::to_string),
    };

    let server =
        user_search::build_server(listener, repo, server_config).expect("server should build");
    actix_web::rt::spawn(server);
    url
}

/// Starts a server answering every request with `handler`.
pub fn spawn_stub<F, Fut>(handler: F) -> Url
where
    F: Fn() -> Fut + Clone + Send + 'static,
    Fut: Future<Output = HttpResponse> + 'static,
{
    let (listener, url) = bind();

    let server = HttpServer::new(move || App::new().default_service(web::to(handler.clone())))
        .workers(1)
        .listen(listener)
        .expect("stub should listen")
        .run();
    actix_web::rt::spawn(server);
    url
}
