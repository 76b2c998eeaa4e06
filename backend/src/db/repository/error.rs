//! Errors raised by dataset storage.
//!
//! Variants name what went wrong with a dataset rather than with a generic
//! entity. Each one keeps a [`StoreContext`] so the HTTP layer can report
//! which call failed and on which dataset.

use std::fmt;

use crate::api::{DatasetId, DatasetRole};

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Where a storage error happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreContext {
    /// Repository call, e.g. `store_dataset`
    pub operation: &'static str,
    pub dataset_id: Option<DatasetId>,
    pub dataset_name: Option<String>,
}

impl StoreContext {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            ..Default::default()
        }
    }

    pub fn for_dataset(mut self, dataset_id: DatasetId) -> Self {
        self.dataset_id = Some(dataset_id);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.dataset_name = Some(name.into());
        self
    }
}

impl fmt::Display for StoreContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.operation)?;
        if let Some(id) = self.dataset_id {
            write!(f, " dataset={}", id)?;
        }
        if let Some(ref name) = self.dataset_name {
            write!(f, " name='{}'", name)?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store cannot serve requests right now; callers may retry.
    #[error("Dataset store unavailable: {reason} {context}")]
    Unavailable {
        reason: String,
        context: StoreContext,
    },

    #[error("Dataset {dataset_id} not found {context}")]
    DatasetNotFound {
        dataset_id: DatasetId,
        context: StoreContext,
    },

    /// A dataset was rejected before storage.
    #[error("Invalid dataset: {reason} {context}")]
    InvalidDataset {
        reason: String,
        context: StoreContext,
    },

    /// A dataset exists but was reported by the other side of the shipment.
    #[error("Dataset {dataset_id} is a {actual:?} dataset, expected {expected:?} {context}")]
    RoleMismatch {
        dataset_id: DatasetId,
        expected: DatasetRole,
        actual: DatasetRole,
        context: StoreContext,
    },

    #[error("Failed to serialize records for checksum: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Stored state violates an invariant of the repository itself.
    #[error("Corrupt dataset store: {reason} {context}")]
    Corrupt {
        reason: String,
        context: StoreContext,
    },
}

impl RepositoryError {
    pub fn unavailable(reason: impl Into<String>, context: StoreContext) -> Self {
        Self::Unavailable {
            reason: reason.into(),
            context,
        }
    }

    pub fn not_found(dataset_id: DatasetId, operation: &'static str) -> Self {
        Self::DatasetNotFound {
            dataset_id,
            context: StoreContext::new(operation).for_dataset(dataset_id),
        }
    }

    pub fn invalid(reason: impl Into<String>, context: StoreContext) -> Self {
        Self::InvalidDataset {
            reason: reason.into(),
            context,
        }
    }

    /// Only an unavailable store is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// Client mistakes as opposed to store failures.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound { .. } | Self::InvalidDataset { .. } | Self::RoleMismatch { .. }
        )
    }

    pub fn context(&self) -> Option<&StoreContext> {
        match self {
            Self::Unavailable { context, .. }
            | Self::DatasetNotFound { context, .. }
            | Self::InvalidDataset { context, .. }
            | Self::RoleMismatch { context, .. }
            | Self::Corrupt { context, .. } => Some(context),
            Self::Serialization(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_context_display() {
        let context = StoreContext::new("get_records")
            .for_dataset(DatasetId::new(7))
            .named("Q1 shipments");
        assert_eq!(
            context.to_string(),
            "[get_records dataset=7 name='Q1 shipments']"
        );
        assert_eq!(StoreContext::new("list_datasets").to_string(), "[list_datasets]");
    }

    #[test]
    fn test_only_unavailable_is_retryable() {
        let err = RepositoryError::unavailable("offline", StoreContext::new("list_datasets"));
        assert!(err.is_retryable());
        assert!(!err.is_client_error());

        let missing = RepositoryError::not_found(DatasetId::new(3), "get_records");
        assert!(!missing.is_retryable());
        assert!(missing.is_client_error());
        assert_eq!(missing.to_string(), "Dataset 3 not found [get_records dataset=3]");
    }

    #[test]
    fn test_role_mismatch_message() {
        let err = RepositoryError::RoleMismatch {
            dataset_id: DatasetId::new(2),
            expected: DatasetRole::Customer,
            actual: DatasetRole::Supplier,
            context: StoreContext::new("get_role_records").for_dataset(DatasetId::new(2)),
        };
        assert!(err.is_client_error());
        assert!(err.to_string().contains("Supplier dataset, expected Customer"));
    }

    #[test]
    fn test_serialization_has_no_context() {
        let json_err = serde_json::from_str::<i64>("x").unwrap_err();
        let err = RepositoryError::from(json_err);
        assert!(err.context().is_none());
        assert!(!err.is_client_error());
    }
}
