use serde::{Deserialize, Serialize};
use yaml_float::{
    construct, from_str, is_float, is_float_value, represent, resolve, resolve_with, to_string,
    Error, FloatOptions, Grammar, ScalarText, Style, YamlFloat, FLOAT_TYPE,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Measurement {
    name: String,
    value: YamlFloat,
    tolerance: YamlFloat,
}

#[test]
fn test_negative_zero_document_round_trip() {
    let scalar = ScalarText::Text("-0.0");
    assert!(resolve(&scalar));

    let value = construct(&scalar).unwrap();
    assert_eq!(value.to_bits(), (-0.0f64).to_bits());

    let text = FLOAT_TYPE.represent_default(value, None);
    assert_eq!(text, "-0.0");
}

#[test]
fn test_recognizer_cases() {
    assert!(!resolve(&ScalarText::Text("")));
    assert!(!resolve(&ScalarText::Absent));
    assert!(resolve(&ScalarText::Text("0")));
    assert!(resolve(&ScalarText::Text(".inf")));
    assert!(resolve(&ScalarText::Text("+.INF")));
    assert!(resolve(&ScalarText::Text(".NaN")));
    assert!(!resolve(&ScalarText::Text("nan")));
    assert!(!resolve(&ScalarText::Text("1.2.3")));
}

#[test]
fn test_recognizer_is_stricter_than_constructor() {
    for text in ["1_000.5", "1:30.5", "+1.5"] {
        let scalar = ScalarText::Text(text);
        assert!(!resolve(&scalar), "{:?} should need the extended grammar", text);
        assert!(resolve_with(&scalar, Grammar::Extended));
        assert!(construct(&scalar).is_ok());
    }
}

#[test]
fn test_sexagesimal() {
    assert_eq!(construct(&ScalarText::Text("1:30.5")).unwrap(), 90.5);
    assert_eq!(construct(&ScalarText::Text("-1:00")).unwrap(), -60.0);
}

#[test]
fn test_representer_special_values() {
    assert_eq!(represent(f64::NAN, Style::Lowercase), ".nan");
    assert_eq!(represent(f64::NAN, Style::Uppercase), ".NAN");
    assert_eq!(represent(f64::NAN, Style::Camelcase), ".NaN");
    assert_eq!(represent(f64::INFINITY, Style::Lowercase), ".inf");
    assert_eq!(represent(f64::NEG_INFINITY, Style::Lowercase), "-.inf");
    for style in Style::ALL {
        assert_eq!(represent(-0.0, style), "-0.0");
    }
}

#[test]
fn test_classifier() {
    assert!(!is_float_value(4.0));
    assert!(is_float_value(4.5));
    assert!(is_float_value(-0.0));
    assert!(!is_float(&4i64));
    assert!(is_float(&4.5f64));
}

#[test]
fn test_special_values_survive_every_style() {
    for style in Style::ALL {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let text = represent(value, style);
            assert!(resolve(&ScalarText::Text(&text)), "{:?} not recognized", text);
            assert_eq!(construct(&ScalarText::Text(&text)).unwrap(), value);
        }
        let text = represent(f64::NAN, style);
        assert!(construct(&ScalarText::Text(&text)).unwrap().is_nan());
    }
}

#[test]
fn test_from_str_reports_unrecognized_text() {
    match from_str("twelve") {
        Err(Error::Unrecognized(text)) => assert_eq!(text, "twelve"),
        other => panic!("Expected Unrecognized, got {:?}", other),
    }
}

#[test]
fn test_to_string_uses_lowercase() {
    assert_eq!(to_string(f64::NAN), ".nan");
    assert_eq!(to_string(f64::INFINITY), ".inf");
    assert_eq!(to_string(3.25), "3.25");
}

#[test]
fn test_options_from_config() {
    let options: FloatOptions =
        serde_json::from_str(r#"{"style":"uppercase","grammar":"extended"}"#).unwrap();
    assert_eq!(options.represent(f64::NAN), ".NAN");
    assert!(options.resolve_str("1:30.5"));

    let err = serde_json::from_str::<FloatOptions>(r#"{"style":"shouting"}"#);
    assert!(err.is_err());
}

#[test]
fn test_serde_struct_round_trip() {
    let measurement = Measurement {
        name: "lap".to_string(),
        value: YamlFloat(-0.0),
        tolerance: YamlFloat(f64::INFINITY),
    };

    let json = serde_json::to_string(&measurement).unwrap();
    assert_eq!(
        json,
        r#"{"name":"lap","value":"-0.0","tolerance":".inf"}"#
    );

    let back: Measurement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, measurement);
}

#[test]
fn test_serde_accepts_numbers_and_extended_text() {
    let json = r#"{"name":"split","value":"1:30.5","tolerance":0.25}"#;
    let back: Measurement = serde_json::from_str(json).unwrap();
    assert_eq!(back.value, YamlFloat(90.5));
    assert_eq!(back.tolerance, YamlFloat(0.25));

    let json = r#"{"name":"bad","value":"ninety","tolerance":0}"#;
    assert!(serde_json::from_str::<Measurement>(json).is_err());
}
