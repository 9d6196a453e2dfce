//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `StoreError` from `todoboard_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;

use todoboard_core::storage::StoreError;

/// Map a Scan SDK error to StoreError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> StoreError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed("Table not found".to_string())
        }
        ScanError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to StoreError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed("Table not found".to_string())
        }
        GetItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to StoreError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed("Table not found".to_string())
        }
        PutItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            StoreError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to StoreError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
) -> StoreError {
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed("Table not found".to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            StoreError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            StoreError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            StoreError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a DescribeTable SDK error to StoreError.
///
/// Not used by `exists`, which treats ResourceNotFound as `Ok(false)`.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
) -> StoreError {
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => {
            StoreError::QueryFailed("Table not found".to_string())
        }
        DescribeTableError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("DescribeTable failed: {:?}", err)),
    }
}

/// Map a CreateTable SDK error to StoreError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
) -> StoreError {
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => {
            StoreError::QueryFailed("Table creation already in progress".to_string())
        }
        CreateTableError::LimitExceededException(_) => {
            StoreError::QueryFailed("Table limit exceeded".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            StoreError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => StoreError::QueryFailed(format!("CreateTable failed: {:?}", err)),
    }
}
