use serde_json::{json, Value};
use std::path::Path;
use std::process::Output;
use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BIN: &str = env!("CARGO_BIN_EXE_enrich-from-wikidata");

/// Nothing listens on the discard port, so every fetch fails fast.
const UNREACHABLE_API: &str = "http://127.0.0.1:9/w/api.php";

async fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("RUST_LOG", "info")
        .output()
        .await
        .unwrap()
}

fn write_json(path: &Path, j: &Value) {
    std::fs::write(path, serde_json::to_string_pretty(j).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_wrong_argument_count() {
    let output = run(&["only-one.json"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());

    let output = run(&[]).await;
    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_help_exits_successfully() {
    let output = run(&["--help"]).await;
    assert_eq!(output.status.code(), Some(0));
}

#[tokio::test]
async fn test_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.json");
    let out = dir.path().join("out.json");
    let output = run(&[input.to_str().unwrap(), out.to_str().unwrap()]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error reading input file"));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    std::fs::write(&input, "{ not json").unwrap();
    let output = run(&[input.to_str().unwrap(), out.to_str().unwrap()]).await;
    assert_eq!(output.status.code(), Some(1));

    write_json(&input, &json!(["WikidataKey", "Q1"]));
    let output = run(&[input.to_str().unwrap(), out.to_str().unwrap()]).await;
    assert_eq!(output.status.code(), Some(1));
}

#[tokio::test]
async fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    write_json(&input, &json!({"Title": "Half-Life"}));
    let out = dir.path().join("no-such-dir").join("out.json");
    let output = run(&[input.to_str().unwrap(), out.to_str().unwrap()]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error writing output file"));
}

#[tokio::test]
async fn test_missing_key_output_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    write_json(
        &input,
        &json!({
            "Title": "Ōkami",
            "Description": "",
            "Languages": [],
            "GenreIds": ["3f0c9c1e-5b0a-4c57-9a8e-0b7d3f6b3c11"]
        }),
    );
    let output = run(&[
        input.to_str().unwrap(),
        out.to_str().unwrap(),
        "--api-url",
        UNREACHABLE_API,
    ])
    .await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        std::fs::read_to_string(&input).unwrap()
    );
}

#[tokio::test]
async fn test_missing_key_numbers_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    let text = "{\n  \"Title\": \"Quake\",\n  \"Rating\": 4.50,\n  \"Size\": 1e5,\n  \"SteamId\": 123456789012345678901234\n}";
    std::fs::write(&input, text).unwrap();
    let output = run(&[
        input.to_str().unwrap(),
        out.to_str().unwrap(),
        "--api-url",
        UNREACHABLE_API,
    ])
    .await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), text);
}

#[tokio::test]
async fn test_unreachable_api_still_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    write_json(&input, &json!({"WikidataKey": "Q279744"}));
    let output = run(&[
        input.to_str().unwrap(),
        out.to_str().unwrap(),
        "--api-url",
        UNREACHABLE_API,
    ])
    .await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(read_json(&out), json!({"WikidataKey": "Q279744"}));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to fetch"), "{stderr}");
}

#[tokio::test]
async fn test_enrich_from_mock_api() {
    let q279744 = std::fs::read_to_string("test_data/Q279744.json").unwrap();
    let q279744: Value = serde_json::from_str(&q279744).unwrap();
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/api.php"))
        .and(query_param("ids", "Q279744"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&q279744))
        .mount(&mock_server)
        .await;
    let api_url = mock_server.uri() + "/w/api.php";

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.json");
    let out = dir.path().join("out.json");
    write_json(
        &input,
        &json!({"WikidataKey": "Q279744", "Title": "Half-Life (1998)", "Languages": []}),
    );
    let output = run(&[
        input.to_str().unwrap(),
        out.to_str().unwrap(),
        "--api-url",
        &api_url,
    ])
    .await;
    assert_eq!(output.status.code(), Some(0));
    let enriched = read_json(&out);
    assert_eq!(
        enriched,
        json!({
            "WikidataKey": "Q279744",
            "Title": "Half-Life (1998)",
            "Languages": ["en", "fr", "de"],
            "Description": "1998 video game",
            "ReleaseDate": "1998-11-19T00:00:00",
            "ExternalUrls": {"Wikidata": "https://www.wikidata.org/wiki/Q279744"}
        })
    );

    // A second pass over the output changes nothing.
    let again = dir.path().join("again.json");
    let output = run(&[
        out.to_str().unwrap(),
        again.to_str().unwrap(),
        "--api-url",
        &api_url,
    ])
    .await;
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        std::fs::read_to_string(&again).unwrap(),
        std::fs::read_to_string(&out).unwrap()
    );
}
