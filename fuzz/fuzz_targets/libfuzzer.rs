#![no_main]

use libfuzzer_sys::fuzz_target;
use na_json::{Error, PathSegment, SubscriptingOptions, Value};

// Input layout: <path bytes> 0xFF <json text>
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0xFF) else {
        return;
    };
    let (path_bytes, json) = (&data[..split], &data[split + 1..]);
    let Ok(doc) = na_json::from_slice::<Value>(json) else {
        return;
    };

    let keys: Vec<String> = path_bytes
        .iter()
        .map(|b| char::from(b'a' + b % 8).to_string())
        .collect();
    let indices: Vec<usize> = path_bytes.iter().map(|b| usize::from(b % 8)).collect();
    let path: Vec<&dyn PathSegment> = path_bytes
        .iter()
        .enumerate()
        .map(|(i, b)| -> &dyn PathSegment {
            if b & 0x80 == 0 { &keys[i] } else { &indices[i] }
        })
        .collect();

    let required = doc.get_value(&path);
    for options in [
        SubscriptingOptions::empty(),
        SubscriptingOptions::NULL_BECOMES_NONE,
        SubscriptingOptions::MISSING_KEY_BECOMES_NONE,
        SubscriptingOptions::all(),
    ] {
        let optional = doc.get_value_opt(&path, options);
        match (&required, optional) {
            (Ok(a), Ok(Some(b))) => assert!(std::ptr::eq(*a, b)),
            (Ok(_), other) => panic!("resolved path reported as {other:?}"),
            (Err(Error::KeyNotFound(_) | Error::IndexOutOfBounds(_)), Ok(None)) => {
                assert!(options.contains(SubscriptingOptions::MISSING_KEY_BECOMES_NONE));
            }
            (Err(Error::UnexpectedSubscript(_)), Ok(None)) => {
                assert!(options.contains(SubscriptingOptions::NULL_BECOMES_NONE));
            }
            (Err(error), Ok(Some(_))) => panic!("{error} reported as present"),
            (Err(_), _) => {}
        }
    }

    let _ = doc.get_i64_or(&path, 0);
    let _ = doc.get_str_or(&path, "");
    let _ = doc.get_array_of_opt::<Value>(&path, SubscriptingOptions::all());
});
