// ROM launch gateway web server
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use hyper::service::{make_service_fn, service_fn};
use hyper::Server;

use rom_launch_web::log_info;
use rom_launch_web::web::config::load_config;
use rom_launch_web::web::models::{AppState, SharedState};
use rom_launch_web::web::routes::handle_request;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = load_config();

    let addr: SocketAddr = config.listen_addr.parse().map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Bad listen_addr {:?}: {}", config.listen_addr, e),
        )
    })?;

    let state: SharedState = Arc::new(AppState::new(config));

    let make_svc = make_service_fn(move |_conn| {
        let state = state.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req| handle_request(req, state.clone())))
        }
    });

    let server = Server::bind(&addr).serve(make_svc);

    println!("ROM launch gateway starting on http://{addr}");
    println!("Available endpoints:");
    println!("  GET  /         - Launch form");
    println!("  GET  /launch   - Launch a game (?rom=<identifier>)");
    println!("  GET  /health   - Health check");
    log_info!("Listening on {}", addr);

    server
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    Ok(())
}
