use crate::types_db::record::Record;

/// Operations every contact table exposes, whether owned or shared.
pub trait HashTable {
    /// Stores `value` under `key`, returning the record it replaced, if any.
    fn insert(&mut self, key: &str, value: Record) -> Option<Record>;

    /// Returns a copy of the record stored under `key`.
    fn search(&self, key: &str) -> Option<Record>;

    /// Renders one line per bucket in ascending index order.
    fn dump(&self) -> Vec<String>;

    fn capacity(&self) -> usize;
}
