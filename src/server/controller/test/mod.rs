use reqwest::{header, redirect::Policy, Method, Response};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::server::{router, state::AppState};


/// Application served on an ephemeral localhost port.
struct TestServer {
    base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Starts the application against the given store and search endpoint.
    async fn start(db: &DatabaseConnection, search_url: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = router::app(AppState::new(
            db.clone(),
            reqwest::Client::new(),
            search_url.to_string(),
        ));

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        // Redirects are asserted on, not followed
        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            base_url: format!("http://{}", addr),
            client,
        }
    }

    async fn get(&self, path: &str) -> Response {
        self.request(Method::GET, path).await
    }

    async fn request(&self, method: Method, path: &str) -> Response {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }

    async fn post_form(&self, path: &str, body: &str) -> Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body.to_string())
            .send()
            .await
            .unwrap()
    }
}

fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
