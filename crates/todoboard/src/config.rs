use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// DynamoDB table name (default: "todo")
    pub table_name: String,
    /// S3 bucket holding the page template (default: "static-webpages-s3")
    pub bucket: String,
    /// Object key of the page template (default: "base.html")
    pub template_key: String,
    /// Read capacity units used when the table is auto-created (default: 1)
    pub read_capacity: i64,
    /// Write capacity units used when the table is auto-created (default: 1)
    pub write_capacity: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - DynamoDB table name (default: "todo")
    /// - `TEMPLATE_BUCKET` - S3 bucket for the page template (default: "static-webpages-s3")
    /// - `TEMPLATE_KEY` - object key of the template (default: "base.html")
    /// - `TABLE_READ_CAPACITY` - read capacity for auto-created tables (default: 1)
    /// - `TABLE_WRITE_CAPACITY` - write capacity for auto-created tables (default: 1)
    ///
    /// AWS region and credentials come from the SDK default chain.
    pub fn from_env() -> Self {
        Self {
            table_name: env::var("TABLE_NAME").unwrap_or_else(|_| "todo".to_string()),
            bucket: env::var("TEMPLATE_BUCKET")
                .unwrap_or_else(|_| "static-webpages-s3".to_string()),
            template_key: env::var("TEMPLATE_KEY").unwrap_or_else(|_| "base.html".to_string()),
            read_capacity: env::var("TABLE_READ_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            write_capacity: env::var("TABLE_WRITE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
