use std::collections::BTreeMap;
use std::marker::PhantomData;

use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::Document;

use crate::db::models::{DeleteAck, Entity, InsertManyAck, InsertOneAck, Record, UpdateAck};
use crate::error::AppError;

/// Repository trait for the operations every portfolio collection supports.
///
/// This trait allows mocking the database layer in tests.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// List every document in the collection, in natural order.
    async fn list(&self) -> Result<Vec<Record<T>>, AppError>;

    /// Find a document by its identifier.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<T>>, AppError>;

    /// Insert a single document; the identifier is generated here.
    async fn insert_one(&self, item: T) -> Result<InsertOneAck, AppError>;

    /// Insert several documents in one round trip.
    async fn insert_many(&self, items: Vec<T>) -> Result<InsertManyAck, AppError>;

    /// Merge `changes` into the matching document with `$set`. Never upserts.
    async fn update_by_id(&self, id: ObjectId, changes: Document) -> Result<UpdateAck, AppError>;

    /// Delete the matching document; deleting a missing id reports zero.
    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, AppError>;
}

fn encode<T: Entity>(item: &T) -> Result<Document, AppError> {
    bson::to_document(item).map_err(|e| AppError::Internal(format!("Failed to encode document: {e}")))
}

/// MongoDB implementation of the Repository, bound to one collection.
pub struct MongoRepository<T> {
    collection: mongodb::Collection<Document>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> MongoRepository<T> {
    pub fn new(db: &mongodb::Database, collection: &str) -> Self {
        Self {
            collection: db.collection(collection),
            _entity: PhantomData,
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MongoRepository<T> {
    async fn list(&self) -> Result<Vec<Record<T>>, AppError> {
        use mongodb::bson::doc;

        let mut cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        let mut records = Vec::new();
        use futures::TryStreamExt;
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?
        {
            records.push(Record::from_document(document)?);
        }

        Ok(records)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Record<T>>, AppError> {
        use mongodb::bson::doc;

        let document = self
            .collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        document.map(Record::from_document).transpose()
    }

    async fn insert_one(&self, item: T) -> Result<InsertOneAck, AppError> {
        let id = ObjectId::new();
        let mut document = encode(&item)?;
        document.insert("_id", id);

        self.collection
            .insert_one(document)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection = self.collection_name(), %id, "Inserted document");

        Ok(InsertOneAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn insert_many(&self, items: Vec<T>) -> Result<InsertManyAck, AppError> {
        let mut documents = Vec::with_capacity(items.len());
        let mut inserted_ids = BTreeMap::new();

        for (index, item) in items.iter().enumerate() {
            let id = ObjectId::new();
            let mut document = encode(item)?;
            document.insert("_id", id);
            documents.push(document);
            inserted_ids.insert(index, id.to_hex());
        }

        let result = self
            .collection
            .insert_many(documents)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(
            collection = self.collection_name(),
            count = result.inserted_ids.len(),
            "Inserted documents"
        );

        Ok(InsertManyAck {
            acknowledged: true,
            inserted_count: result.inserted_ids.len() as u64,
            inserted_ids,
        })
    }

    async fn update_by_id(&self, id: ObjectId, changes: Document) -> Result<UpdateAck, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<DeleteAck, AppError> {
        use mongodb::bson::doc;

        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}
