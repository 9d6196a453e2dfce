//! DynamoDB store implementation.
//!
//! Implements `TodoStore` from `todoboard_core::storage` on top of a single
//! table keyed by the numeric `id` attribute.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ProvisionedThroughput, ScalarAttributeType, TableStatus,
};
use aws_sdk_dynamodb::Client;

use todoboard_core::storage::{Result, StoreError, TodoStore};
use todoboard_core::todo::TodoItem;

use super::conversions::{item_to_todo, todo_to_item};
use super::error::{
    map_create_table_error, map_delete_item_error, map_describe_table_error, map_get_item_error,
    map_put_item_error, map_scan_error,
};

const ACTIVE_POLL_INTERVAL: Duration = Duration::from_secs(2);
const ACTIVE_POLL_ATTEMPTS: u32 = 60;

/// DynamoDB-backed to-do store.
pub struct DynamoDbTodoStore {
    client: Client,
    table_name: String,
}

impl DynamoDbTodoStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn id_key(id: i64) -> AttributeValue {
        AttributeValue::N(id.to_string())
    }

    /// Polls DescribeTable until the table reports ACTIVE.
    async fn wait_for_active(&self) -> Result<()> {
        for _ in 0..ACTIVE_POLL_ATTEMPTS {
            let result = self
                .client
                .describe_table()
                .table_name(&self.table_name)
                .send()
                .await
                .map_err(map_describe_table_error)?;

            if matches!(
                result.table().and_then(|t| t.table_status()),
                Some(TableStatus::Active)
            ) {
                return Ok(());
            }

            tokio::time::sleep(ACTIVE_POLL_INTERVAL).await;
        }

        Err(StoreError::ConnectionFailed(format!(
            "table {} did not become active",
            self.table_name
        )))
    }
}

#[async_trait]
impl TodoStore for DynamoDbTodoStore {
    async fn exists(&self) -> Result<bool> {
        use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;

        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => Ok(true),
            Err(err) => match err.into_service_error() {
                DescribeTableError::ResourceNotFoundException(_) => Ok(false),
                err => Err(StoreError::QueryFailed(format!(
                    "DescribeTable failed: {:?}",
                    err
                ))),
            },
        }
    }

    async fn create_table(&self, read_capacity: i64, write_capacity: i64) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name("id")
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name("id")
            .attribute_type(ScalarAttributeType::N)
            .build()
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(read_capacity)
            .write_capacity_units(write_capacity)
            .build()
            .map_err(|e| StoreError::InvalidData(e.to_string()))?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::Provisioned)
            .provisioned_throughput(throughput)
            .send()
            .await
            .map_err(map_create_table_error)?;

        self.wait_for_active().await
    }

    async fn scan_all(&self) -> Result<Vec<TodoItem>> {
        let mut items = Vec::new();
        let mut start_key = None;

        // Follow LastEvaluatedKey until the scan is exhausted.
        loop {
            let result = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key)
                .send()
                .await
                .map_err(map_scan_error)?;

            for item in result.items.unwrap_or_default() {
                items.push(item_to_todo(&item)?);
            }

            start_key = result.last_evaluated_key;
            if start_key.is_none() {
                break;
            }
        }

        Ok(items)
    }

    async fn get(&self, id: i64) -> Result<Option<TodoItem>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", Self::id_key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_todo(&item)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, item: &TodoItem) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(todo_to_item(item)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", Self::id_key(id))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }
}
