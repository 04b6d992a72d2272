//! HTML form method override.
//!
//! Browsers can only submit forms with `GET` or `POST`. A `POST` that names another verb,
//! either through a `_method` query parameter (`/update/3?_method=PUT`) or an
//! `X-HTTP-Method-Override` header, is rewritten to that verb before routing. Only `PUT`,
//! `PATCH` and `DELETE` may be requested; any other value leaves the request untouched.
//!
//! The rewrite has to happen before a route is picked, so this runs in front of the
//! routing table rather than on individual routes; see `router::app`.

use axum::{extract::Request, http::Method};

/// Query parameter naming the overriding method.
pub const METHOD_OVERRIDE_FIELD: &str = "_method";

/// Header naming the overriding method.
pub const METHOD_OVERRIDE_HEADER: &str = "x-http-method-override";

/// Rewrites the method of a `POST` request that asks for an override.
///
/// # Arguments
/// - `request` - Incoming request
///
/// # Returns
/// - `Request` - The same request, with its method replaced when an override applies
pub async fn method_override(mut request: Request) -> Request {
    if request.method() != Method::POST {
        return request;
    }

    if let Some(method) = requested_method(&request) {
        tracing::debug!(
            "Overriding POST {} as {}",
            request.uri().path(),
            method
        );
        *request.method_mut() = method;
    }

    request
}

fn requested_method(request: &Request) -> Option<Method> {
    let from_query = request.uri().query().and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == METHOD_OVERRIDE_FIELD)
            .map(|(_, value)| value.into_owned())
    });

    let requested = from_query.or_else(|| {
        request
            .headers()
            .get(METHOD_OVERRIDE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    })?;

    match requested.trim().to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
