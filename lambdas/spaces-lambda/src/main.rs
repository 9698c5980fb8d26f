use aws_sdk_dynamodb::Client as DynamoClient;
use lambda_http::{run, service_fn, tracing, Error, Request};
use spaces_shared::AppState;
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    // The DynamoDB client is created once at startup and reused across
    // invocations; it is read-only after construction.
    let config = aws_config::load_from_env().await;
    let table_name = std::env::var("TABLE_NAME").unwrap_or_else(|_| "spaces".to_string());
    let state = AppState::new(DynamoClient::new(&config), table_name);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
