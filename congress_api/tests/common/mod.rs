#![allow(dead_code)]

use congress_api::Config;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "testing_key";

pub fn config(server: &MockServer) -> Config {
    Config::new(API_KEY).with_base_url(format!("{}/congress/{{version}}", server.uri()))
}

pub fn load_fixture(name: &str) -> Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

/// Runs a blocking client call off the async test's worker threads.
pub async fn blocking<T, F>(f: F) -> T
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await.unwrap()
}

/// A member-list envelope with `count` records under `results[0][key]`.
pub fn roster(key: &str, count: usize) -> Value {
    let records: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": format!("M{:06}", i),
                "first_name": format!("First{}", i),
                "last_name": format!("Last{}", i),
                "party": if i % 2 == 0 { "R" } else { "D" },
                "in_office": true,
            })
        })
        .collect();
    json!({
        "status": "OK",
        "copyright": "Copyright (c) 2017 Pro Publica Inc. All Rights Reserved.",
        "results": [{
            "congress": "115",
            "chamber": "Senate",
            "num_results": count,
            "offset": 0,
            key: records,
        }]
    })
}
