//! Integration smoke tests for `qbank`

use qbank::core::catalog::{Category, QuestionBank};
use qbank::core::store::JsonFileStore;
use qbank::get_version;
use std::path::PathBuf;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn sample_catalog_answers_every_query() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/resources.json");
    let bank = QuestionBank::new(JsonFileStore::new(path));

    assert!(bank.categories().is_ok());
    for category in Category::ALL {
        assert_eq!(bank.trimesters(category).unwrap().len(), 12);
    }
    assert!(bank.course("cse-1111-1st").is_ok());
}
