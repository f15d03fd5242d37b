// HTTP response helper functions shared by the route handlers

use hyper::{Body, Response, StatusCode};

/// Build a 302 redirect to the given location.
pub fn redirect(location: &str) -> Response<Body> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("location", location)
        .body(Body::empty())
        .unwrap()
}

/// Build an HTML response.
pub fn html_response(status: StatusCode, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap()
}

/// Build a raw JSON string response.
pub fn json_raw(status: StatusCode, json: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(json))
        .unwrap()
}

/// Build the launch failure page. The reason comes straight from the
/// launcher protocol, so it is escaped before interpolation.
pub fn error_page(status: StatusCode, reason: &str) -> Response<Body> {
    let escaped = html_escape::encode_text(reason);
    let body = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Problem launching game.</title></head>
<body bgcolor="black" text="white">
<br><br><br>
<center>
<h1>
Problem launching game.
<br><br>
{escaped}
</h1>
</center>
</body>
</html>
"#
    );
    html_response(status, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_sets_location() {
        let response = redirect("http://10.0.0.5:8081/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "http://10.0.0.5:8081/"
        );
    }

    #[tokio::test]
    async fn test_error_page_contains_reason() {
        let response = error_page(StatusCode::BAD_GATEWAY, "Server Full");
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8_lossy(&body).to_string();
        assert!(body.contains("Problem launching game."));
        assert!(body.contains("Server Full"));
    }

    #[tokio::test]
    async fn test_error_page_escapes_html() {
        let response = error_page(StatusCode::BAD_GATEWAY, "<script>alert(1)</script>");
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body = String::from_utf8_lossy(&body).to_string();
        assert!(!body.contains("<script>"));
        assert!(body.contains("&lt;script&gt;"));
    }
}
