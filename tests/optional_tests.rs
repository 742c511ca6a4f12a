use na_json::{Error, SubscriptingOptions as Opts, Value, from_str};

fn sample() -> Value {
    from_str(r#"{"a": {"b": [1, 2, 3], "c": null}}"#).unwrap()
}

const NONE: Opts = Opts::empty();
const NULL: Opts = Opts::NULL_BECOMES_NONE;
const MISSING: Opts = Opts::MISSING_KEY_BECOMES_NONE;

#[test]
fn missing_key_becomes_none() {
    assert_eq!(sample().get_str_opt(&[&"a", &"d"], MISSING).unwrap(), None);
}

#[test]
fn terminal_null_becomes_none() {
    assert_eq!(sample().get_i64_opt(&[&"a", &"c"], NULL).unwrap(), None);
}

#[test]
fn null_along_path_becomes_none() {
    let doc = sample();
    assert_eq!(doc.get_i64_opt(&[&"a", &"c", &"d"], NULL).unwrap(), None);
    assert_eq!(doc.get_i64_opt(&[&"a", &"c", &0, &"e"], NULL).unwrap(), None);
}

#[test]
fn out_of_bounds_becomes_none() {
    assert_eq!(sample().get_i64_opt(&[&"a", &"b", &5], MISSING).unwrap(), None);
    assert_eq!(sample().get_i64_opt(&[&"a", &"b", &-2], MISSING).unwrap(), None);
}

#[test]
fn missing_without_flag_is_an_error() {
    let doc = sample();
    match doc.get_str_opt(&[&"a", &"d"], NULL) {
        Err(Error::KeyNotFound(key)) => assert_eq!(key, "d"),
        other => panic!("unexpected result: {other:?}"),
    }
    match doc.get_i64_opt(&[&"a", &"b", &5], NONE) {
        Err(Error::IndexOutOfBounds(5)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn null_along_path_without_flag_is_unexpected_subscript() {
    match sample().get_i64_opt(&[&"a", &"c", &"d"], MISSING) {
        Err(Error::UnexpectedSubscript("str")) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn terminal_null_without_flag_is_not_convertible() {
    match sample().get_i64_opt(&[&"a", &"c"], MISSING) {
        Err(Error::TypeNotConvertible(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn unexpected_subscript_is_never_absorbed() {
    let doc = sample();
    for options in [NONE, NULL, MISSING, Opts::all()] {
        match doc.get_value_opt(&[&"a", &"b", &"x"], options) {
            Err(Error::UnexpectedSubscript("str")) => {}
            other => panic!("unexpected result with {options:?}: {other:?}"),
        }
    }
}

#[test]
fn type_mismatch_on_non_null_is_never_absorbed() {
    let doc = sample();
    match doc.get_str_opt(&[&"a", &"b", &0], Opts::all()) {
        Err(Error::TypeNotConvertible(_)) => {}
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn present_values_match_required_accessors() {
    let doc: Value = from_str(
        r#"{"s": "text", "i": -4, "u": 9, "f": 1.5, "t": true, "l": [1, 2], "o": {"k": "v"}}"#,
    )
    .unwrap();
    for options in [NONE, NULL, MISSING, Opts::all()] {
        assert_eq!(
            doc.get_str_opt(&[&"s"], options).unwrap(),
            Some(doc.get_str(&[&"s"]).unwrap())
        );
        assert_eq!(
            doc.get_i64_opt(&[&"i"], options).unwrap(),
            Some(doc.get_i64(&[&"i"]).unwrap())
        );
        assert_eq!(
            doc.get_u64_opt(&[&"u"], options).unwrap(),
            Some(doc.get_u64(&[&"u"]).unwrap())
        );
        assert_eq!(
            doc.get_f64_opt(&[&"f"], options).unwrap(),
            Some(doc.get_f64(&[&"f"]).unwrap())
        );
        assert_eq!(
            doc.get_bool_opt(&[&"t"], options).unwrap(),
            Some(doc.get_bool(&[&"t"]).unwrap())
        );
        assert_eq!(
            doc.get_array_opt(&[&"l"], options).unwrap(),
            Some(doc.get_array(&[&"l"]).unwrap())
        );
        assert_eq!(
            doc.get_array_of_opt::<u8>(&[&"l"], options).unwrap(),
            Some(doc.get_array_of::<u8>(&[&"l"]).unwrap())
        );
        assert_eq!(
            doc.get_object_opt(&[&"o"], options).unwrap(),
            Some(doc.get_object(&[&"o"]).unwrap())
        );
        assert_eq!(
            doc.get_object_of_opt::<String>(&[&"o"], options).unwrap(),
            Some(doc.get_object_of::<String>(&[&"o"]).unwrap())
        );
        assert_eq!(
            doc.decode_opt::<(i64, i64)>(&[&"l"], options).unwrap(),
            Some(doc.decode::<(i64, i64)>(&[&"l"]).unwrap())
        );
    }
}

#[test]
fn value_opt_keeps_terminal_null() {
    let doc = sample();
    assert_eq!(
        doc.get_value_opt(&[&"a", &"c"], NULL).unwrap(),
        Some(&Value::Null)
    );
}

#[test]
fn decode_of_option_keeps_terminal_null() {
    let doc = sample();
    assert_eq!(
        doc.decode_opt::<Option<i64>>(&[&"a", &"c"], NULL).unwrap(),
        Some(None)
    );
    assert_eq!(doc.decode_opt::<i64>(&[&"a", &"c"], NULL).unwrap(), None);
}

#[test]
fn empty_options_behave_like_required() {
    let doc = sample();
    assert!(doc.get_i64_opt(&[&"a", &"c"], NONE).is_err());
    assert!(doc.get_i64_opt(&[&"a", &"z"], NONE).is_err());
    assert_eq!(doc.get_i64_opt(&[&"a", &"b", &0], NONE).unwrap(), Some(1));
}

#[test]
fn array_of_with_null_element_fails_even_with_null_flag() {
    let doc: Value = from_str(r#"{"l": [1, null, 3]}"#).unwrap();
    assert!(matches!(
        doc.get_array_of_opt::<i64>(&[&"l"], Opts::all()),
        Err(Error::TypeNotConvertible(_))
    ));
}

#[test]
fn fallbacks() {
    let doc = sample();
    assert_eq!(doc.get_i64_or(&[&"a", &"c"], 10).unwrap(), 10);
    assert_eq!(doc.get_i64_or(&[&"a", &"z"], 11).unwrap(), 11);
    assert_eq!(doc.get_i64_or(&[&"a", &"c", &"z"], 12).unwrap(), 12);
    assert_eq!(doc.get_i64_or(&[&"a", &"b", &0], 13).unwrap(), 1);
    assert_eq!(doc.get_str_or(&[&"a", &"name"], "anon").unwrap(), "anon");
    assert!(doc.get_bool_or(&[&"flag"], true).unwrap());
    assert_eq!(doc.get_f64_or(&[&"ratio"], 0.5).unwrap(), 0.5);
    assert_eq!(doc.get_u64_or(&[&"a", &"b", &9], 3).unwrap(), 3);
    assert_eq!(doc.get_array_or(&[&"x"], &[]).unwrap(), &[] as &[Value]);
    assert_eq!(doc.get_array_of_or::<i64>(&[&"x"], vec![0]).unwrap(), [0]);
    assert!(doc.get_object_or(&[&"x"], &Default::default()).unwrap().is_empty());
    assert!(doc.get_object_of_or::<i64>(&[&"x"], Default::default()).unwrap().is_empty());
    assert_eq!(doc.get_value_or(&[&"x"], &Value::Bool(false)).unwrap(), &Value::Bool(false));
    assert_eq!(doc.decode_or::<String>(&[&"x"], "d".to_owned()).unwrap(), "d");
}

#[test]
fn fallbacks_still_report_other_failures() {
    let doc = sample();
    assert!(matches!(
        doc.get_i64_or(&[&"a", &"b", &"x"], 0),
        Err(Error::UnexpectedSubscript(_))
    ));
    assert!(matches!(
        doc.get_str_or(&[&"a", &"b", &0], "zero"),
        Err(Error::TypeNotConvertible(_))
    ));
}

#[test]
fn options_combine() {
    let both = NULL | MISSING;
    assert_eq!(both, Opts::all());
    assert!(both.contains(NULL));
    assert!(both.contains(MISSING));
    assert!(!NULL.contains(MISSING));
    assert!(NONE.is_empty());
    assert_eq!(Opts::default(), NONE);

    let mut options = NONE;
    options |= MISSING;
    assert!(options.contains(MISSING));
    assert_eq!(format!("{options:?}"), "{MISSING_KEY_BECOMES_NONE}");
}
