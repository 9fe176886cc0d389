use std::sync::Arc;

use parking_lot::Mutex;

use crate::common::config::TableConfig;
use crate::common::exception::TableError;
use crate::container::chained_hash_table::{ChainedHashTable, TableStats};
use crate::container::hash_function::{HashFunction, HashFunctionKind};
use crate::container::hash_table::HashTable;
use crate::types_db::record::Record;

/// A cloneable handle to one [`ChainedHashTable`] guarded by a single mutex.
///
/// Chain walks and chain mutation are not safe to interleave, so every
/// operation holds the lock for its whole duration.
#[derive(Debug)]
pub struct SharedHashTable<H = HashFunctionKind> {
    inner: Arc<Mutex<ChainedHashTable<H>>>,
}

impl<H> Clone for SharedHashTable<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedHashTable<HashFunctionKind> {
    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        Ok(Self::from_table(ChainedHashTable::from_config(config)?))
    }
}

impl<H: HashFunction> SharedHashTable<H> {
    pub fn from_table(table: ChainedHashTable<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(table)),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn stats(&self) -> TableStats {
        self.inner.lock().stats()
    }

    /// Runs `f` against the table while holding the lock once.
    pub fn with_table<R>(&self, f: impl FnOnce(&ChainedHashTable<H>) -> R) -> R {
        let table = self.inner.lock();
        f(&table)
    }
}

impl<H: HashFunction> HashTable for SharedHashTable<H> {
    fn insert(&mut self, key: &str, value: Record) -> Option<Record> {
        self.inner.lock().insert(key, value)
    }

    fn search(&self, key: &str) -> Option<Record> {
        self.inner.lock().search(key).cloned()
    }

    fn dump(&self) -> Vec<String> {
        self.inner.lock().dump()
    }

    fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}
