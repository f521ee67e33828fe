use pretty_assertions::assert_eq;
use std_util::{assert_err_is, assert_ok};
use tabula::{record, schema::Field, stmt::Condition, Config, Flavor, Model, Store};
use tabula_driver_sqlite::Sqlite;

fn client() -> Model {
    Model::builder("client")
        .primary_key("id")
        .field(Field::text("notes").not_null())
        .field(Field::boolean("active"))
        .field(Field::date("since"))
        .build()
        .unwrap()
}

const CONFIG: &str = r#"
flavor = "sqlite"

[types]
boolean = "boolean"
date = "date"
"#;

#[test]
fn configured_ddl() {
    let config = assert_ok!(Config::from_toml_str(CONFIG));
    assert_eq!(config.flavor, Flavor::Sqlite);

    let sql = assert_ok!(config.serializer().create_table(&client(), &config.catalog()));
    assert_eq!(
        sql,
        "create table client (\n  \
         id integer primary key autoincrement,\n  \
         notes varchar(255) not null,\n  \
         active boolean,\n  \
         since date\n\
         );\n"
    );
}

#[test]
fn default_config_leaves_kinds_unmapped() {
    let config = Config::new();

    assert_err_is!(
        config.serializer().create_table(&client(), &config.catalog()),
        is_unsupported_field_kind
    );
}

#[test]
fn configured_catalog_provisions_sqlite() {
    let config = assert_ok!(Config::from_toml_str(CONFIG));
    let model = client();

    let db = assert_ok!(Sqlite::in_memory());
    assert_ok!(db.create_table(&model, &config.catalog()));
    assert_ok!(db.insert(
        &model,
        &record! { "id" => 3, "notes" => "new", "active" => true, "since" => "2024-05-01" }
    ));

    let condition = assert_ok!(Condition::lt(&model, "id", 10));
    let records = assert_ok!(db.select(&model, &condition));
    assert_eq!(
        records,
        [record! { "id" => 3, "notes" => "new", "active" => true, "since" => "2024-05-01" }]
    );
}

#[test]
fn load_from_file() {
    let dir = assert_ok!(tempfile::tempdir());

    let path = dir.path().join("tabula.toml");
    assert_ok!(std::fs::write(&path, CONFIG));
    assert_eq!(assert_ok!(Config::load(&path)).flavor, Flavor::Sqlite);

    let path = dir.path().join("oracle.toml");
    assert_ok!(std::fs::write(&path, "flavor = \"oracle\"\n"));
    let err = assert_err_is!(Config::load(&path), is_invalid_config);
    assert!(err.to_string().starts_with(&format!("invalid config: {}: ", path.display())));

    let missing = dir.path().join("missing.toml");
    assert_err_is!(Config::load(&missing), is_invalid_config);
}
