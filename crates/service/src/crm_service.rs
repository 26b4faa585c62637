//! Deal and contact CRUD.
//!
//! Neither counts as a touch; pipeline and contact effects show up through
//! the ledger on the next read.

use std::sync::Arc;

use touchbase_core::{
    Contact, ContactInput, ContactUpdate, Deal, DealInput, DealUpdate,
};
use touchbase_storage::{Storage, StorageError};

use crate::ServiceError;

pub struct CrmService {
    storage: Arc<Storage>,
}

impl CrmService {
    #[must_use]
    pub const fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn create_deal(&self, input: &DealInput) -> Result<i64, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("deal name must not be empty".to_owned()));
        }
        self.require_account(input.account_id)?;
        Ok(self.storage.insert_deal(input)?)
    }

    pub fn update_deal(&self, id: i64, update: &DealUpdate) -> Result<Deal, ServiceError> {
        Ok(self.storage.update_deal(id, update)?)
    }

    pub fn delete_deal(&self, id: i64) -> Result<(), ServiceError> {
        if self.storage.delete_deal(id)? {
            Ok(())
        } else {
            Err(ServiceError::Storage(StorageError::NotFound { entity: "deal", id }))
        }
    }

    pub fn list_deals(&self, account_id: i64) -> Result<Vec<Deal>, ServiceError> {
        self.require_account(account_id)?;
        Ok(self.storage.list_deals(account_id)?)
    }

    pub fn create_contact(&self, input: &ContactInput) -> Result<i64, ServiceError> {
        if input.name.trim().is_empty() {
            return Err(ServiceError::InvalidInput("contact name must not be empty".to_owned()));
        }
        self.require_account(input.account_id)?;
        Ok(self.storage.insert_contact(input)?)
    }

    pub fn update_contact(
        &self,
        id: i64,
        update: &ContactUpdate,
    ) -> Result<Contact, ServiceError> {
        Ok(self.storage.update_contact(id, update)?)
    }

    pub fn delete_contact(&self, id: i64) -> Result<(), ServiceError> {
        if self.storage.delete_contact(id)? {
            Ok(())
        } else {
            Err(ServiceError::Storage(StorageError::NotFound { entity: "contact", id }))
        }
    }

    pub fn list_contacts(&self, account_id: i64) -> Result<Vec<Contact>, ServiceError> {
        self.require_account(account_id)?;
        Ok(self.storage.list_contacts(account_id)?)
    }

    fn require_account(&self, id: i64) -> Result<(), ServiceError> {
        self.storage
            .get_account(id)?
            .map(|_| ())
            .ok_or(ServiceError::Storage(StorageError::NotFound { entity: "account", id }))
    }
}
