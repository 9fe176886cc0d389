//! # Chained Hash Table
//!
//! A fixed-capacity hash table mapping contact names to [`Record`]s. Collisions
//! are resolved by separate chaining: every bucket heads a singly linked chain
//! of entries kept in insertion order.
//!
//! ## Layout
//!
//! ```text
//!   buckets (len == capacity)          entries (arena, append-only)
//!   ┌───┬──────────┐                   ┌────┬───────────────────────────┬──────┐
//!   │ 0 │ None     │                   │ id │ key / value               │ next │
//!   │ 5 │ Some(1) ─┼──────────────────►│  1 │ "Amy" / Amy: 111-222-3333 │ 2    │
//!   │ 7 │ Some(0) ─┼──────┐            │  2 │ "May" / May: 222-333-1111 │ None │
//!   │ 9 │ None     │      └───────────►│  0 │ "Rebecca" / ...           │ None │
//!   └───┴──────────┘                   └────┴───────────────────────────┴──────┘
//! ```
//!
//! Links are arena indices rather than boxed nodes. The arena only grows: there
//! is no removal, so an id handed out once stays valid for the table's life.
//!
//! ## Operations
//!
//! | Method       | Average | Worst | Notes                                    |
//! |--------------|---------|-------|------------------------------------------|
//! | `insert`     | O(1)    | O(n)  | Replaces in place on duplicate key       |
//! | `search`     | O(1)    | O(n)  | `None` on miss                           |
//! | `dump`       | O(c+n)  | O(c+n)| One line per bucket                      |
//!
//! ## Thread Safety
//!
//! `ChainedHashTable` is not synchronized. Use
//! [`SharedHashTable`](crate::container::shared_hash_table::SharedHashTable) to
//! share one table between threads.

use std::fmt;
use std::iter::FusedIterator;

use log::{debug, info, trace};

use crate::common::config::{BucketIndex, EntryId, TableConfig, MIN_TABLE_CAPACITY};
use crate::common::exception::TableError;
use crate::container::hash_function::{CodePointSum, HashFunction, HashFunctionKind};
use crate::container::hash_table::HashTable;
use crate::types_db::record::Record;

/// One link of a bucket chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: Record,
    next: Option<EntryId>,
}

impl Entry {
    fn new(key: &str, value: Record) -> Self {
        Self {
            key: key.to_owned(),
            value,
            next: None,
        }
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_value(&self) -> &Record {
        &self.value
    }
}

/// Point-in-time shape of a table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    pub capacity: usize,
    pub entries: usize,
    pub occupied_buckets: usize,
    pub longest_chain: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "capacity: {} entries: {} occupied buckets: {} longest chain: {}",
            self.capacity, self.entries, self.occupied_buckets, self.longest_chain
        )
    }
}

/// Separate-chaining hash table from contact name to [`Record`].
#[derive(Debug, Clone)]
pub struct ChainedHashTable<H = CodePointSum> {
    capacity: usize,
    buckets: Vec<Option<EntryId>>,
    entries: Vec<Entry>,
    hash_fn: H,
}

impl ChainedHashTable<CodePointSum> {
    /// Creates a table with `capacity` buckets using the code point sum hash.
    ///
    /// # Errors
    ///
    /// Returns `TableError::InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, TableError> {
        Self::with_hash_function(capacity, CodePointSum)
    }
}

impl ChainedHashTable<HashFunctionKind> {
    /// Creates a table from a [`TableConfig`], picking the hash function at runtime.
    pub fn from_config(config: &TableConfig) -> Result<Self, TableError> {
        Self::with_hash_function(config.capacity, config.hash_function)
    }
}

impl<H: HashFunction> ChainedHashTable<H> {
    /// Creates a table with `capacity` buckets and the given hash function.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of buckets. Fixed for the life of the table.
    /// * `hash_fn` - Strategy used to place keys into buckets.
    pub fn with_hash_function(capacity: usize, hash_fn: H) -> Result<Self, TableError> {
        if capacity < MIN_TABLE_CAPACITY {
            return Err(TableError::InvalidCapacity(capacity));
        }

        info!("Creating chained hash table with {} buckets", capacity);

        Ok(Self {
            capacity,
            buckets: vec![None; capacity],
            entries: Vec::new(),
            hash_fn,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of distinct keys stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the bucket `key` hashes to.
    pub fn bucket_of(&self, key: &str) -> BucketIndex {
        self.hash_fn.bucket_index(key, self.capacity)
    }

    /// Stores `value` under `key`.
    ///
    /// A new key is appended at the tail of its bucket's chain. An existing key
    /// keeps its position and has its record replaced; the old record is
    /// returned.
    pub fn insert(&mut self, key: &str, value: Record) -> Option<Record> {
        let index = self.bucket_of(key);

        let Some(head) = self.buckets[index] else {
            let id = self.push_entry(key, value);
            self.buckets[index] = Some(id);
            debug!("Inserted '{}' as head of bucket {}", key, index);
            return None;
        };

        let mut current = head;
        loop {
            trace!("Bucket {}: visiting entry {}", index, current);
            let entry = &mut self.entries[current];
            if entry.key == key {
                let previous = std::mem::replace(&mut entry.value, value);
                debug!("Updated '{}' in bucket {}", key, index);
                return Some(previous);
            }
            match entry.next {
                Some(next) => current = next,
                None => break,
            }
        }

        let id = self.push_entry(key, value);
        self.entries[current].next = Some(id);
        debug!("Appended '{}' to bucket {} after entry {}", key, index, current);
        None
    }

    /// Looks up the record stored under `key`.
    pub fn search(&self, key: &str) -> Option<&Record> {
        let index = self.bucket_of(key);
        let found = self
            .chain(index)
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value);

        if found.is_some() {
            debug!("Search hit for '{}' in bucket {}", key, index);
        } else {
            debug!("Search miss for '{}' in bucket {}", key, index);
        }
        found
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.search(key).is_some()
    }

    /// Iterates the chain of bucket `index` from head to tail.
    ///
    /// An out-of-range index yields an empty chain.
    pub fn chain(&self, index: BucketIndex) -> ChainIter<'_> {
        ChainIter {
            entries: &self.entries,
            next: self.buckets.get(index).copied().flatten(),
        }
    }

    pub fn chain_len(&self, index: BucketIndex) -> usize {
        self.chain(index).count()
    }

    /// Renders every bucket as `Index {i}: Empty` or `Index {i}: - {v1} - {v2}`.
    pub fn dump(&self) -> Vec<String> {
        (0..self.capacity)
            .map(|index| {
                let mut line = format!("Index {}:", index);
                let mut chain = self.chain(index).peekable();
                if chain.peek().is_none() {
                    line.push_str(" Empty");
                }
                for entry in chain {
                    line.push_str(&format!(" - {}", entry.value));
                }
                line
            })
            .collect()
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            capacity: self.capacity,
            entries: self.entries.len(),
            ..Default::default()
        };
        for index in 0..self.capacity {
            let len = self.chain_len(index);
            if len > 0 {
                stats.occupied_buckets += 1;
            }
            stats.longest_chain = stats.longest_chain.max(len);
        }
        stats
    }

    fn push_entry(&mut self, key: &str, value: Record) -> EntryId {
        let id = self.entries.len();
        self.entries.push(Entry::new(key, value));
        id
    }
}

impl<H: HashFunction> HashTable for ChainedHashTable<H> {
    fn insert(&mut self, key: &str, value: Record) -> Option<Record> {
        ChainedHashTable::insert(self, key, value)
    }

    fn search(&self, key: &str) -> Option<Record> {
        ChainedHashTable::search(self, key).cloned()
    }

    fn dump(&self) -> Vec<String> {
        ChainedHashTable::dump(self)
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<H: HashFunction> fmt::Display for ChainedHashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.dump() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Iterator over the entries of one bucket, in chain order.
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    entries: &'a [Entry],
    next: Option<EntryId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.entries.get(self.next?)?;
        self.next = entry.next;
        Some(entry)
    }
}

impl FusedIterator for ChainIter<'_> {}
