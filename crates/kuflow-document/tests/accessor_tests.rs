use chrono::NaiveDate;
use kuflow_document::*;
use kuflow_test_utils::{
    init_tracing, sample_document, sample_file, sample_file_without_original_name,
    sample_principal, sample_principal_user,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Number};

#[test]
fn test_get_string() {
    let doc = sample_document();
    assert_eq!(get_string(&doc, "key1").unwrap(), "value1");
    assert_eq!(
        get_string(&doc, "key2.key2_key1.1.key2_key1_key1").unwrap(),
        "value 1"
    );
}

#[test]
fn test_find_string() {
    let doc = sample_document();
    assert_eq!(find_string(&doc, "key1").unwrap().as_deref(), Some("value1"));
    assert_eq!(find_string(&doc, "key99").unwrap(), None);
    assert_eq!(find_string(&doc, "key2.key2_key1.5.key2_key1_key1").unwrap(), None);
}

#[test]
fn test_string_type_mismatch() {
    let doc = sample_document();
    assert!(get_string(&doc, "number").unwrap_err().is_type_mismatch());
    assert!(find_string(&doc, "boolean").unwrap_err().is_type_mismatch());
    assert!(get_string(&doc, "key2").unwrap_err().is_type_mismatch());
}

#[test]
fn test_deep_missing_reads_are_property_missing() {
    init_tracing();
    let doc = sample_document();

    let err = get_number(&doc, "key2.key2_key1.10").unwrap_err();
    assert!(err.is_property_missing(), "{err}");

    let err = get_string(&doc, "key2.key2_key1.100.key2_key1_key2").unwrap_err();
    assert!(err.is_property_missing(), "{err}");
    assert_eq!(
        err.to_string(),
        "property missing: key2.key2_key1.100.key2_key1_key2"
    );
}

#[test]
fn test_number_is_strict() {
    let doc = sample_document();
    assert_eq!(get_number(&doc, "number").unwrap(), Number::from(500));
    assert_eq!(get_number(&doc, "key2.key2_key2").unwrap(), Number::from(500));
    assert!(get_number(&doc, "numberAsString").unwrap_err().is_type_mismatch());
    assert_eq!(find_integer(&doc, "number").unwrap(), Some(500));
}

#[test]
fn test_array_read_is_pass_through() {
    let doc = sample_document();
    assert_eq!(get_array(&doc, "numbers").unwrap(), vec![json!(500), json!("1000")]);
    assert!(get_number_list(&doc, "numbers").unwrap_err().is_type_mismatch());
}

#[test]
fn test_boolean_list_mixed_representations() {
    let doc = sample_document();
    assert_eq!(
        get_boolean_list(&doc, "booleans").unwrap(),
        vec![true, false, true, false]
    );
    assert!(get_boolean(&doc, "boolean").unwrap());
}

#[test]
fn test_dates() {
    let doc = sample_document();
    let date = get_date(&doc, "date").unwrap();
    assert_eq!(date.date_naive(), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(date.timestamp(), 1_577_836_800);

    let dates = get_date_list(&doc, "dates").unwrap();
    assert_eq!(dates.len(), 2);
    assert_eq!(dates[1].date_naive(), NaiveDate::from_ymd_opt(3030, 1, 1).unwrap());

    assert!(get_date(&doc, "key1").unwrap_err().is_type_mismatch());
}

#[test]
fn test_objects() {
    let doc = sample_document();
    let object = get_object(&doc, "object").unwrap();
    assert_eq!(object.get("nested"), Some(&json!({"deep": [1, 2, 3]})));
    assert_eq!(find_object(&doc, "missing").unwrap(), None);
    assert!(get_object(&doc, "numbers").unwrap_err().is_type_mismatch());
}

#[test]
fn test_files() {
    let doc = sample_document();
    assert_eq!(get_file(&doc, "file").unwrap(), sample_file());
    assert_eq!(
        get_file_list(&doc, "files").unwrap(),
        vec![sample_file(), sample_file_without_original_name()]
    );
    assert!(get_file(&doc, "principal").unwrap_err().is_type_mismatch());
    assert!(get_file(&doc, "key1").unwrap_err().is_type_mismatch());
    assert_eq!(find_file(&doc, "missing").unwrap(), None);
}

#[test]
fn test_principals() {
    let doc = sample_document();
    assert_eq!(get_principal(&doc, "principal").unwrap(), sample_principal());
    assert_eq!(
        find_principal_list(&doc, "principals").unwrap(),
        vec![sample_principal(), sample_principal_user()]
    );
    assert!(find_principal(&doc, "file").unwrap_err().is_type_mismatch());
}

#[test]
fn test_reference_with_invalid_utf8_escape_is_type_mismatch() {
    let doc = json!({"who": "kuflow-principal:id=%FF;type=USER;name=Homer;"});
    assert!(find_principal(&doc, "who").unwrap_err().is_type_mismatch());
}

#[test]
fn test_date_requires_full_calendar_form() {
    let doc = json!({"d": "2020-1-1"});
    assert!(find_date(&doc, "d").unwrap_err().is_type_mismatch());
}

#[test]
fn test_find_list_missing_is_empty_but_find_is_none() {
    let doc = sample_document();
    assert_eq!(find_string(&doc, "missing").unwrap(), None);
    assert!(find_string_list(&doc, "missing").unwrap().is_empty());
    assert!(get_string_list(&doc, "missing").unwrap_err().is_property_missing());
}

#[test]
fn test_null_values() {
    let doc = sample_document();
    assert!(exists(&doc, &Path::from_key("nothing").unwrap()));
    assert!(find_string(&doc, "nothing").unwrap_err().is_type_mismatch());
}

#[test]
fn test_document_wrapper_reads() {
    let doc = Document::new(sample_document());
    assert_eq!(doc.get::<String>("key1").unwrap(), "value1");
    assert_eq!(doc.find::<bool>("missing").unwrap(), None);
    assert_eq!(doc.get_list::<bool>("booleans").unwrap(), vec![true, false, true, false]);
    assert_eq!(doc.find_list::<FileReference>("files").unwrap().len(), 2);
}
