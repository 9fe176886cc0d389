use phonebook::common::config::TableConfig;
use phonebook::common::exception::TableError;
use phonebook::container::chained_hash_table::ChainedHashTable;
use phonebook::container::hash_function::{hash, HashFunctionKind};
use phonebook::types_db::record::Record;

use crate::common::logger::init_test_logger;
use crate::{assert_found, assert_missing, assert_ok};

fn contact_table(capacity: usize) -> ChainedHashTable {
    init_test_logger();
    assert_ok!(ChainedHashTable::new(capacity))
}

#[test]
fn test_lookup_and_miss() {
    let mut table = contact_table(10);
    table.insert("John", Record::new("John", "909-876-1234"));
    table.insert("Rebecca", Record::new("Rebecca", "111-555-0002"));

    assert_found!(table, "John", "John: 909-876-1234");
    assert_found!(table, "Rebecca", "Rebecca: 111-555-0002");
    assert_missing!(table, "Chris");
}

#[test]
fn test_last_write_wins() {
    let mut table = contact_table(10);
    table.insert("Rebecca", Record::new("Rebecca", "111-555-0002"));
    table.insert("Rebecca", Record::new("Rebecca", "999-444-9999"));

    assert_found!(table, "Rebecca", "Rebecca: 999-444-9999");
    let index = table.bucket_of("Rebecca");
    assert_eq!(table.chain_len(index), 1);
}

#[test]
fn test_anagram_collision_keeps_both() {
    let mut table = contact_table(10);
    table.insert("Amy", Record::new("Amy", "111-222-3333"));
    table.insert("May", Record::new("May", "222-333-1111"));

    assert_eq!(hash("Amy", 10), hash("May", 10));
    assert_eq!(table.chain_len(hash("Amy", 10)), 2);
    assert_found!(table, "Amy", "Amy: 111-222-3333");
    assert_found!(table, "May", "May: 222-333-1111");
}

#[test]
fn test_write_then_read_after_mixed_history() {
    let mut table = contact_table(5);
    let mut expected = std::collections::HashMap::new();

    for round in 0..3 {
        for i in 0..40 {
            let name = format!("contact-{}", i % 25);
            let number = format!("555-{:04}", round * 100 + i);
            table.insert(&name, Record::new(name.clone(), number.clone()));
            assert_found!(table, name.as_str(), format!("{}: {}", name, number));
            expected.insert(name, number);
        }
    }

    assert_eq!(table.len(), expected.len());
    for (name, number) in &expected {
        assert_eq!(table.search(name).map(Record::get_number), Some(number.as_str()));
    }
}

#[test]
fn test_dump_covers_every_bucket_once() {
    let mut table = contact_table(10);
    let names = ["Riley", "John", "Rebecca", "Amy", "May", "Chris"];
    for name in names {
        table.insert(name, Record::new(name, "000-000-0000"));
    }

    let lines = table.dump();
    assert_eq!(lines.len(), 10);
    for (index, line) in lines.iter().enumerate() {
        assert!(line.starts_with(&format!("Index {}:", index)), "{}", line);
    }
    for name in names {
        let line = &lines[table.bucket_of(name)];
        assert!(line.contains(&format!("- {}: 000-000-0000", name)), "{}", line);
    }
}

#[test]
fn test_invalid_capacity() {
    init_test_logger();
    assert_eq!(ChainedHashTable::new(0).unwrap_err(), TableError::InvalidCapacity(0));
}

#[test]
fn test_xxh3_table_from_config() {
    init_test_logger();
    let config = TableConfig {
        capacity: 64,
        hash_function: HashFunctionKind::Xxh3,
    };
    let mut table = assert_ok!(ChainedHashTable::from_config(&config));
    for i in 0..200 {
        let name = format!("user{}", i);
        table.insert(&name, Record::new(name.clone(), i.to_string()));
    }
    assert_eq!(table.len(), 200);
    assert_found!(table, "user199", "user199: 199");
    assert_missing!(table, "user200");
}
