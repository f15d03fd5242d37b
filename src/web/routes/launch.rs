// Launch route handler: the gateway's one real operation.
//
// Contract: given a `rom` query parameter, produce exactly one of
//   - a 302 redirect to the game server the launcher provisioned, or
//   - an HTML error page with a human-readable reason.

use hyper::{Body, Request, Response, StatusCode};
use std::convert::Infallible;

use crate::web::launcher::{self, LaunchResult};
use crate::web::models::SharedState;
use crate::web::request_parsing::get_query_param;
use crate::web::response_helpers::{error_page, redirect};
use crate::{log_error, log_info};

pub async fn handle(
    req: Request<Body>,
    state: SharedState,
) -> Result<Response<Body>, Infallible> {
    let rom = match get_query_param(req.uri(), "rom") {
        Some(rom) if !rom.trim().is_empty() => rom,
        _ => {
            return Ok(error_page(
                StatusCode::BAD_REQUEST,
                "Missing rom parameter.",
            ))
        }
    };

    // The identifier goes to the launcher as a single argv element, so no
    // shell is involved; control characters are still nonsense in a ROM name.
    if rom.chars().any(char::is_control) {
        return Ok(error_page(
            StatusCode::BAD_REQUEST,
            "Invalid rom parameter.",
        ));
    }

    log_info!("[LAUNCH] rom={}", rom);

    // At most one launcher invocation in flight, gateway-wide. The guard
    // drops with the block, whichever way the launch ends.
    let result = {
        let _guard = state.launch_lock.lock().await;
        launcher::run_launcher(&state.config, &rom).await
    };

    match result {
        LaunchResult::Address(addr) if launcher::is_valid_address(&addr) => {
            log_info!("[LAUNCH] rom={} -> {}", rom, addr);
            Ok(redirect(&format!(
                "{}://{}/",
                state.config.redirect_scheme, addr
            )))
        }
        LaunchResult::Address(addr) => {
            log_error!("[LAUNCH] rom={} returned unusable address {:?}", rom, addr);
            Ok(error_page(
                StatusCode::BAD_GATEWAY,
                "Launcher returned an invalid address.",
            ))
        }
        LaunchResult::Error(reason) => {
            log_error!("[LAUNCH] rom={} failed: {}", rom, reason);
            let status = if reason == launcher::ERR_SERVER_FULL {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::BAD_GATEWAY
            };
            Ok(error_page(status, &reason))
        }
    }
}
