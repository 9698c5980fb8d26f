pub mod authz;
pub mod codec;
pub mod error;
pub mod response;
pub mod spaces;
pub mod store;
pub mod types;
pub mod validator;

use aws_sdk_dynamodb::Client as DynamoClient;
use std::sync::Arc;

/// Shared application state
pub struct AppState {
    pub dynamo_client: DynamoClient,
    pub table_name: String,
}

impl AppState {
    pub fn new(dynamo_client: DynamoClient, table_name: String) -> Arc<Self> {
        Arc::new(Self {
            dynamo_client,
            table_name,
        })
    }
}
