use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use crate::db::models::{DeleteAck, Entity, InsertManyAck, InsertOneAck, Record, UpdateAck};
use crate::db::repository::Repository;
use crate::error::AppError;

/// In-memory Repository used by handler and router tests.
pub struct InMemoryRepository<T> {
    records: Mutex<Vec<Record<T>>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(vec![]),
        }
    }
}

impl<T: Clone> InMemoryRepository<T> {
    pub fn snapshot(&self) -> Vec<Record<T>> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Entity + Clone> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> Result<Vec<Record<T>>, AppError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<T>>, AppError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn insert_one(&self, item: T) -> Result<InsertOneAck, AppError> {
        let id = ObjectId::new();
        self.records.lock().unwrap().push(Record { id, data: item });
        Ok(InsertOneAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn insert_many(&self, items: Vec<T>) -> Result<InsertManyAck, AppError> {
        let mut records = self.records.lock().unwrap();
        let mut inserted_ids = BTreeMap::new();
        for (index, item) in items.into_iter().enumerate() {
            let id = ObjectId::new();
            records.push(Record { id, data: item });
            inserted_ids.insert(index, id.to_hex());
        }
        Ok(InsertManyAck {
            acknowledged: true,
            inserted_count: inserted_ids.len() as u64,
            inserted_ids,
        })
    }

    async fn update_by_id(&self, id: ObjectId, changes: Document) -> Result<UpdateAck, AppError> {
        let mut records = self.records.lock().unwrap();
        let Some(record) = records.iter_mut().find(|r| r.id == id) else {
            return Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let before = bson::to_document(&record.data)
            .map_err(|e| AppError::Internal(e.to_string()))?;
        let mut after = before.clone();
        for (key, value) in changes {
            after.insert(key, value);
        }

        if after == before {
            return Ok(UpdateAck {
                matched_count: 1,
                modified_count: 0,
            });
        }

        record.data =
            bson::from_document(after).map_err(|e| AppError::Database(e.to_string()))?;
        Ok(UpdateAck {
            matched_count: 1,
            modified_count: 1,
        })
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: (before - records.len()) as u64,
        })
    }
}
