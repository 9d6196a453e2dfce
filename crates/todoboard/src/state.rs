//! Shared application state.
//!
//! Cloned into every request handler. The store and template source are
//! trait objects so the DynamoDB/S3 collaborators can be swapped for
//! in-memory backends in tests. Both are remote services, so there is no
//! teardown to coordinate.

use std::sync::Arc;

use todoboard_core::{storage::TodoStore, template::TemplateSource};

use crate::{
    config::Config,
    storage::DynamoDbTodoStore,
    templates::S3TemplateSource,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Backing store for to-do items.
    pub store: Arc<dyn TodoStore>,
    /// Source of the page template.
    pub templates: Arc<dyn TemplateSource>,
    /// Process-wide configuration, initialized once at startup.
    pub config: Config,
}

impl AppState {
    /// Creates state from explicit collaborators.
    pub fn new(
        store: Arc<dyn TodoStore>,
        templates: Arc<dyn TemplateSource>,
        config: Config,
    ) -> Self {
        Self {
            store,
            templates,
            config,
        }
    }

    /// Creates state wired to DynamoDB and S3 via the SDK default chain.
    pub async fn from_env(config: Config) -> Self {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
        let s3_client = aws_sdk_s3::Client::new(&aws_config);

        let store = Arc::new(DynamoDbTodoStore::new(dynamodb_client, &config.table_name));
        let templates = Arc::new(S3TemplateSource::new(
            s3_client,
            &config.bucket,
            &config.template_key,
        ));

        Self::new(store, templates, config)
    }
}
