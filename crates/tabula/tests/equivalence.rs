//! The same conditions select the same records from the in-memory store
//! and from SQLite.

use pretty_assertions::assert_eq;
use std_util::assert_ok;
use tabula::{
    record,
    schema::{Field, FieldKindTag},
    stmt::{CompareOp, Condition, MatchMode, Record, Value},
    BatchSelector, Catalog, MemoryStore, Model, Store,
};
use tabula_driver_sqlite::Sqlite;

fn client() -> Model {
    Model::builder("client")
        .primary_key("id")
        .field(Field::decimal("standard_rate", 2))
        .field(Field::text("notes"))
        .field(Field::link("account", "account"))
        .field(Field::boolean("active"))
        .build()
        .unwrap()
}

fn records() -> Vec<Record> {
    vec![
        record! { "id" => 1, "standard_rate" => 45.0, "notes" => "Prefers email", "account" => 7, "active" => true },
        record! { "id" => 4, "standard_rate" => 12.5, "notes" => "late payer", "account" => 70 },
        record! { "id" => 9, "notes" => "50% discount", "account" => 17, "active" => false },
        record! { "id" => 12, "standard_rate" => 99.99, "notes" => "prefers phone" },
        record! { "id" => 42, "standard_rate" => 12.5, "notes" => "5000 discount", "account" => 7 },
        record! { "id" => 420, "standard_rate" => 80.0, "account" => 42 },
        record! { "id" => 421, "standard_rate" => 10.0, "notes" => "PREFERS EMAIL", "active" => true },
    ]
}

struct Stores {
    memory: MemoryStore,
    sqlite: Sqlite,
}

fn setup(model: &Model) -> Stores {
    setup_with(model, records())
}

fn setup_with(model: &Model, records: Vec<Record>) -> Stores {
    let catalog = Catalog::default().with(FieldKindTag::Boolean, "boolean");

    let mut memory = MemoryStore::new();
    let sqlite = assert_ok!(Sqlite::in_memory());
    assert_ok!(sqlite.create_table(model, &catalog));

    for record in records {
        assert_ok!(sqlite.insert(model, &record));
        assert_ok!(memory.insert(model, record));
    }

    Stores { memory, sqlite }
}

fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .map(|record| record.value("id").as_i64().unwrap())
        .collect()
}

fn assert_same_selection(stores: &Stores, model: &Model, condition: &Condition, expected: &[i64]) {
    let memory = assert_ok!(stores.memory.select(model, condition));
    let sqlite = assert_ok!(stores.sqlite.select(model, condition));

    assert_eq!(ids(&memory), expected, "memory; condition={condition:?}");
    assert_eq!(ids(&sqlite), expected, "sqlite; condition={condition:?}");
}

#[test]
fn like_modes() {
    let model = client();
    let stores = setup(&model);

    let cases: [(&str, &str, MatchMode, &[i64]); 7] = [
        ("notes", "prefers", MatchMode::PrefixOnly, &[12]),
        ("notes", "email", MatchMode::SuffixOnly, &[1]),
        ("notes", "discount", MatchMode::BothEnds, &[9, 42]),
        ("notes", "payer", MatchMode::BothEnds, &[4]),
        ("id", "42", MatchMode::PrefixOnly, &[42, 420, 421]),
        ("id", "2", MatchMode::SuffixOnly, &[12, 42]),
        ("account", "7", MatchMode::PrefixOnly, &[1, 4, 42]),
    ];

    for (column, pattern, mode, expected) in cases {
        let condition = assert_ok!(Condition::like(&model, column, pattern, mode));
        assert_same_selection(&stores, &model, &condition, expected);
    }
}

#[test]
fn escaped_like() {
    let model = client();
    let stores = setup(&model);

    let condition = assert_ok!(Condition::like_escaped(
        &model,
        "notes",
        "50%",
        MatchMode::PrefixOnly
    ));
    assert_same_selection(&stores, &model, &condition, &[9]);
}

#[test]
fn comparisons() {
    let model = client();
    let stores = setup(&model);

    let cases: [(&str, CompareOp, Value, &[i64]); 7] = [
        ("standard_rate", CompareOp::GreaterThan, Value::from(40), &[1, 12, 420]),
        ("standard_rate", CompareOp::Equal, Value::from(12.5), &[4, 42]),
        ("standard_rate", CompareOp::LessThan, Value::from(12.5), &[421]),
        ("account", CompareOp::Equal, Value::from(7), &[1, 42]),
        ("account", CompareOp::LessThan, Value::from(17.5), &[1, 9, 42]),
        ("id", CompareOp::LessThan, Value::from(10), &[1, 4, 9]),
        ("id", CompareOp::GreaterThan, Value::from(420), &[421]),
    ];

    for (column, op, operand, expected) in cases {
        let condition = assert_ok!(Condition::compare(&model, column, op, operand));
        assert_same_selection(&stores, &model, &condition, expected);
    }
}

#[test]
fn batches_agree() {
    let model = client();
    let stores = setup(&model);

    let cases: [(&str, &[i64]); 4] = [
        ("42", &[42, 420, 421]),
        ("0", &[1, 4, 9]),
        ("12", &[12]),
        ("99", &[]),
    ];

    for (key, expected) in cases {
        let memory = assert_ok!(BatchSelector::new(&model, &stores.memory).select_batch(key));
        let sqlite = assert_ok!(BatchSelector::new(&model, &stores.sqlite).select_batch(key));

        assert_eq!(ids(&memory), expected, "key={key}");
        assert_eq!(memory, sqlite, "key={key}");
    }
}

#[test]
fn out_of_order_inserts() {
    let model = client();
    let mut records = records();
    records.reverse();
    records.swap(1, 4);
    let stores = setup_with(&model, records);

    for key in ["42", "0", "12"] {
        let memory = assert_ok!(BatchSelector::new(&model, &stores.memory).select_batch(key));
        let sqlite = assert_ok!(BatchSelector::new(&model, &stores.sqlite).select_batch(key));
        assert_eq!(memory, sqlite, "key={key}");
    }

    let condition = assert_ok!(Condition::gt(&model, "id", 0));
    assert_same_selection(&stores, &model, &condition, &[1, 4, 9, 12, 42, 420, 421]);
}

#[test]
fn integer_decimals_read_back_as_floats() {
    let model = client();
    let stores = setup_with(
        &model,
        vec![
            record! { "id" => 2, "standard_rate" => 5 },
            record! { "id" => 1, "standard_rate" => 12.5, "account" => 3 },
        ],
    );

    let condition = assert_ok!(Condition::lt(&model, "id", 10));
    let memory = assert_ok!(stores.memory.select(&model, &condition));
    let sqlite = assert_ok!(stores.sqlite.select(&model, &condition));

    assert_eq!(memory, sqlite);
    assert_eq!(memory[1].value("standard_rate"), &Value::F64(5.0));
}
