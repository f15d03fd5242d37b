// Landing page with a minimal launch form

use hyper::{Body, Response, StatusCode};
use std::convert::Infallible;

use crate::web::response_helpers::html_response;

pub async fn handle() -> Result<Response<Body>, Infallible> {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>ROM Launch Gateway</title></head>
<body bgcolor="black" text="white">
<center>
<h1>ROM Launch Gateway</h1>
<form action="/launch" method="get">
<label for="rom">ROM:</label>
<input type="text" id="rom" name="rom">
<input type="submit" value="Launch">
</form>
</center>
</body>
</html>
"#;
    Ok(html_response(StatusCode::OK, html.to_string()))
}
