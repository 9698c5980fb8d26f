use aws_lambda_events::event::sns::SnsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    run(service_fn(function_handler)).await
}

/// Relays CloudWatch alarm notifications delivered over SNS to a chat
/// webhook. Fully decoupled from the spaces handler; shares no state.
async fn function_handler(event: LambdaEvent<SnsEvent>) -> Result<(), Error> {
    let webhook_url =
        std::env::var("SLACK_WEBHOOK_URL").expect("SLACK_WEBHOOK_URL must be set");
    let http_client = reqwest::Client::new();

    tracing::info!(
        "Monitor event received with {} records",
        event.payload.records.len()
    );

    for record in event.payload.records {
        let response = http_client
            .post(&webhook_url)
            .json(&serde_json::json!({ "text": alarm_text(&record.sns.message) }))
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::error!("Webhook delivery failed with status {}", response.status());
        }
    }

    Ok(())
}

fn alarm_text(message: &str) -> String {
    format!("Houston, we have a problem: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarm_text() {
        assert_eq!(
            alarm_text("ALARM: spaces-api 5xx threshold crossed"),
            "Houston, we have a problem: ALARM: spaces-api 5xx threshold crossed"
        );
    }
}
