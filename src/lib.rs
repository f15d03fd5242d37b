// ROM launch gateway library.
//
// main.rs wires these modules into a hyper server; the integration tests
// drive the router directly through web::routes::handle_request.

pub mod web;
