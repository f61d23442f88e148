//! Users domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports over the
//! shared [`UserStore`], counting every invocation through the
//! [`UserOperationMetrics`] port and logging mutations.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    OperationOutcome, UserOperation, UserOperationMetrics, UsersCommand, UsersQuery,
};
use crate::domain::user_store::UserStoreError;
use crate::domain::{Error, User, UserDraft, UserId, UserStats, UserStore};

fn map_store_error(error: UserStoreError) -> Error {
    let message = error.to_string();
    match error {
        UserStoreError::NotFound { id } => {
            Error::not_found(message).with_details(json!({ "id": id }))
        }
        UserStoreError::DuplicateEmail { .. } => Error::invalid_request(message)
            .with_details(json!({ "field": "email", "code": "duplicate_email" })),
    }
}

fn outcome_of<T>(result: &Result<T, UserStoreError>) -> OperationOutcome {
    match result {
        Ok(_) => OperationOutcome::Ok,
        Err(UserStoreError::NotFound { .. }) => OperationOutcome::NotFound,
        Err(UserStoreError::DuplicateEmail { .. }) => OperationOutcome::Conflict,
    }
}

/// Users service implementing the user driving ports.
#[derive(Clone)]
pub struct UsersService {
    store: Arc<UserStore>,
    metrics: Arc<dyn UserOperationMetrics>,
}

impl UsersService {
    /// Create a service over `store`, reporting to `metrics`.
    pub fn new(store: Arc<UserStore>, metrics: Arc<dyn UserOperationMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Shared store handle.
    #[must_use]
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    async fn record(&self, operation: UserOperation, outcome: OperationOutcome) {
        if let Err(error) = self.metrics.record_operation(operation, outcome).await {
            warn!(%error, %operation, %outcome, "failed to record user operation");
        }
    }

    async fn adjust_user_count(&self, delta: i64) {
        if delta == 0 {
            return;
        }
        if let Err(error) = self.metrics.adjust_user_count(delta).await {
            warn!(%error, delta, "failed to record user count");
        }
    }

    /// Report a store mutation. `count_delta` is the change in record count a
    /// successful `operation` causes.
    async fn finish_mutation(
        &self,
        operation: UserOperation,
        count_delta: i64,
        result: Result<User, UserStoreError>,
    ) -> Result<User, Error> {
        self.record(operation, outcome_of(&result)).await;
        match result {
            Ok(user) => {
                info!(%operation, user_id = %user.id(), "user store mutation applied");
                self.adjust_user_count(count_delta).await;
                Ok(user)
            }
            Err(error) => {
                debug!(%operation, %error, "user store mutation rejected");
                Err(map_store_error(error))
            }
        }
    }
}

#[async_trait]
impl UsersQuery for UsersService {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let users = self.store.list();
        self.record(UserOperation::List, OperationOutcome::Ok).await;
        Ok(users)
    }

    async fn get_user(&self, id: UserId) -> Result<User, Error> {
        let result = self.store.get(id);
        self.record(UserOperation::Get, outcome_of(&result)).await;
        result.map_err(map_store_error)
    }

    async fn user_stats(&self) -> Result<UserStats, Error> {
        let stats = self.store.stats();
        self.record(UserOperation::Stats, OperationOutcome::Ok).await;
        Ok(stats)
    }
}

#[async_trait]
impl UsersCommand for UsersService {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let result = self.store.create(draft);
        self.finish_mutation(UserOperation::Create, 1, result).await
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let result = self.store.update(id, draft);
        self.finish_mutation(UserOperation::Update, 0, result).await
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let result = self.store.delete(id);
        self.finish_mutation(UserOperation::Delete, -1, result).await
    }
}

#[cfg(test)]
#[path = "users_service_tests.rs"]
mod tests;
