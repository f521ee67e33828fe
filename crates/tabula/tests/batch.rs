use pretty_assertions::assert_eq;
use std_util::{assert_err_is, assert_ok};
use tabula::{
    err, record,
    schema::Field,
    stmt::{Record, Value},
    BatchSelector, MemoryStore, Model,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn client() -> Model {
    Model::builder("client")
        .primary_key("id")
        .field(Field::text("notes"))
        .build()
        .unwrap()
}

fn store(model: &Model, ids: &[i64]) -> MemoryStore {
    let mut store = MemoryStore::new();
    for id in ids {
        assert_ok!(store.insert(model, record! { "id" => *id, "notes" => format!("client {id}") }));
    }
    store
}

fn ids(records: &[Record]) -> Vec<i64> {
    records
        .iter()
        .map(|record| record.value("id").as_i64().unwrap())
        .collect()
}

#[test]
fn prefix_batch() {
    init_tracing();
    let model = client();
    let store = store(&model, &[4, 42, 142, 420, 421, 43]);

    let batch = BatchSelector::new(&model, &store);
    assert_eq!(ids(&assert_ok!(batch.select_batch("42"))), [42, 420, 421]);
}

#[test]
fn low_range_batch() {
    init_tracing();
    let model = client();
    let store = store(&model, &[0, 4, 9, 10, 42]);

    let batch = BatchSelector::new(&model, &store);
    assert_eq!(ids(&assert_ok!(batch.select_batch("0"))), [0, 4, 9]);
}

#[test]
fn batch_is_ordered_by_primary_key() {
    init_tracing();
    let model = client();
    let store = store(&model, &[421, 7, 42, 3, 420]);

    let batch = BatchSelector::new(&model, &store);
    assert_eq!(ids(&assert_ok!(batch.select_batch("42"))), [42, 420, 421]);
    assert_eq!(ids(&assert_ok!(batch.select_batch("0"))), [3, 7]);
}

#[test]
fn actions_run_once_per_record_in_order() {
    init_tracing();
    let model = client();
    let store = store(&model, &[420, 3, 42]);

    let mut seen = vec![];
    let processed = assert_ok!(BatchSelector::new(&model, &store).process("42", |record| {
        seen.push(record.value("notes").clone());
        Ok(())
    }));

    assert_eq!(processed, 2);
    assert_eq!(
        seen,
        [Value::from("client 42"), Value::from("client 420")]
    );
}

#[test]
fn empty_batch_processes_nothing() {
    let model = client();
    let store = store(&model, &[42]);

    let processed = assert_ok!(BatchSelector::new(&model, &store).process("77", |_| {
        panic!("no record should be processed")
    }));
    assert_eq!(processed, 0);
}

#[test]
fn invalid_key_processes_nothing() {
    init_tracing();
    let model = client();
    let store = store(&model, &[123]);

    let mut calls = 0;
    let err = assert_err_is!(
        BatchSelector::new(&model, &store).process("123", |_| {
            calls += 1;
            Ok(())
        }),
        is_invalid_batch_key
    );

    assert_eq!(calls, 0);
    assert_eq!(
        err.to_string(),
        "invalid batch key \"123\": expected a 2-character prefix or \"0\""
    );
}

#[test]
fn failing_action_halts_the_batch() {
    init_tracing();
    let model = client();
    let store = store(&model, &[42, 420, 421]);

    let mut seen = vec![];
    let err = assert_err_is!(
        BatchSelector::new(&model, &store).process("42", |record| {
            let id = record.value("id").as_i64().unwrap();
            seen.push(id);
            if id == 420 {
                return Err(err!("mailbox full"));
            }
            Ok(())
        }),
        is_entity_action_failed
    );

    assert_eq!(seen, [42, 420]);
    assert_eq!(
        err.to_string(),
        "entity action failed: client 420: mailbox full"
    );
    assert_eq!(err.root_cause().to_string(), "mailbox full");
}
