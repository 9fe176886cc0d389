use std::thread;

use phonebook::common::config::TableConfig;
use phonebook::container::hash_table::HashTable;
use phonebook::container::shared_hash_table::SharedHashTable;
use phonebook::types_db::record::Record;

use crate::common::logger::init_test_logger;
use crate::{assert_found, assert_missing, assert_ok};

#[test]
fn test_readers_and_writers() {
    init_test_logger();
    let table = assert_ok!(SharedHashTable::from_config(&TableConfig::default()));

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let mut table = table.clone();
            thread::spawn(move || {
                for i in 0..25 {
                    let name = format!("w{}-{}", t, i);
                    table.insert(&name, Record::new(name.clone(), format!("{}", i)));
                }
            })
        })
        .collect();
    let readers: Vec<_> = (0..2)
        .map(|_| {
            let table = table.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    // Either absent or fully written, never torn.
                    if let Some(record) = table.search("w0-0") {
                        assert_eq!(record.to_string(), "w0-0: 0");
                    }
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(table.len(), 100);
    assert_found!(table, "w2-24", "w2-24: 24");
    assert_missing!(table, "w4-0");
}

fn fill(table: &mut dyn HashTable) {
    table.insert("Amy", Record::new("Amy", "111-222-3333"));
    table.insert("May", Record::new("May", "222-333-1111"));
}

#[test]
fn test_shared_table_behind_trait_object() {
    init_test_logger();
    let mut table = assert_ok!(SharedHashTable::from_config(&TableConfig::default()));
    fill(&mut table);

    let dump = table.dump();
    assert_eq!(dump.len(), table.capacity());
    assert_eq!(dump[5], "Index 5: - Amy: 111-222-3333 - May: 222-333-1111");
}
