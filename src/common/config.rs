use crate::container::hash_function::HashFunctionKind;

pub const DEFAULT_TABLE_CAPACITY: usize = 10; // bucket count used when none is given
pub const MIN_TABLE_CAPACITY: usize = 1; // modulo by zero is undefined

pub type EntryId = usize; // slot in a table's entry arena
pub type BucketIndex = usize; // index into a table's bucket array

/// Construction parameters for a contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub capacity: usize,
    pub hash_function: HashFunctionKind,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TABLE_CAPACITY,
            hash_function: HashFunctionKind::CodePointSum,
        }
    }
}

impl TableConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }
}
