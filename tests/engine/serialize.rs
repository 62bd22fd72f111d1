//! Serialization tests for analysis results.
//!
//! Transport adapters ship an `Analysis` as JSON; these tests pin the
//! shape of the serialized tree.

use serde_json::json;
use zapros_engine::Analyser;

#[test]
fn a_subscribe_analysis_serializes_to_json() {
    let analyser = Analyser::standard();
    let analysis = analyser.analyse("подпиши 1-23м").unwrap();
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(
        value,
        json!({
            "action": "subscribe",
            "intent": {
                "action": "subscribe",
                "target": { "type": "group", "value": "1-23м" },
            },
            "words": [
                { "text": "подпиши", "used": true },
                { "text": "1-23м", "used": true },
            ],
            "all_words_used": true,
        })
    );
}

#[test]
fn a_schedule_analysis_serializes_its_date_spec() {
    let analyser = Analyser::standard();
    let analysis = analyser.analyse("завтра").unwrap();
    let value = serde_json::to_value(&analysis).unwrap();
    assert_eq!(value["intent"]["action"], "schedule");
    assert_eq!(value["intent"]["date"]["day_shift"], 1);
    assert_eq!(value["intent"]["week"], false);
    assert_eq!(value["intent"]["target"], serde_json::Value::Null);
}
