use reqwest::Client;

use lectio_configuration::AppConfig;
use lectio_http_server::create_app_router;
use lectio_setup::Application;

/// Boots the full application on an ephemeral port and returns its base
/// url. The default config uses the in-memory attempt store and, since
/// tests compile without a speech runtime, the no-op transcription
/// adapter.
pub async fn setup_test_server() -> Result<(String, Client), Box<dyn std::error::Error>> {
    let app = Application::new(AppConfig::default()).await?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let base_url = format!("http://{}", listener.local_addr()?);
    let router = create_app_router(app.state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok((base_url, Client::new()))
}
