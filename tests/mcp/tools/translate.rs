use std::collections::HashMap;

use oasis::mcp::{OasisMcpServer, types::TranslateParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::{McpTestFixture, extract_tool_result_json, fixture_bilingual};

fn translate_params(fixture: &McpTestFixture, key: &str, lang: Option<&str>) -> TranslateParams {
    TranslateParams {
        project_root_path: fixture.root(),
        key: key.to_string(),
        lang: lang.map(str::to_string),
        params: HashMap::new(),
    }
}

#[tokio::test]
async fn test_translate_default_language() {
    let fixture = fixture_bilingual().unwrap();
    let server = OasisMcpServer::new();

    let result = server
        .translate(Parameters(translate_params(&fixture, "common.back", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["key"], "common.back");
    assert_eq!(json_result["lang"], "en");
    assert_eq!(json_result["value"], "Back");
    assert_eq!(json_result["found"], true);
}

#[tokio::test]
async fn test_translate_with_params() {
    let fixture = fixture_bilingual().unwrap();
    let server = OasisMcpServer::new();

    let mut params = translate_params(&fixture, "common.greeting", Some("ko"));
    params
        .params
        .insert("name".to_string(), "Jinae".to_string());

    let result = server.translate(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["lang"], "ko");
    assert_eq!(json_result["value"], "안녕하세요, Jinae님!");
}

#[tokio::test]
async fn test_translate_falls_back_to_default() {
    let fixture = fixture_bilingual().unwrap();
    let server = OasisMcpServer::new();

    let result = server
        .translate(Parameters(translate_params(
            &fixture,
            "checkup.title",
            Some("ko"),
        )))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["lang"], "ko");
    assert_eq!(json_result["value"], "Post-experience checkup");
    assert_eq!(json_result["found"], true);
}

#[tokio::test]
async fn test_translate_missing_key() {
    let fixture = fixture_bilingual().unwrap();
    let server = OasisMcpServer::new();

    let result = server
        .translate(Parameters(translate_params(&fixture, "nope.missing", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["value"], "nope.missing");
    assert_eq!(json_result["found"], false);
}

#[tokio::test]
async fn test_translate_uses_saved_language() {
    let fixture = fixture_bilingual().unwrap();
    fixture.write_file(".oasis/language", "ko\n").unwrap();
    let server = OasisMcpServer::new();

    let result = server
        .translate(Parameters(translate_params(&fixture, "common.back", None)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["lang"], "ko");
    assert_eq!(json_result["value"], "뒤로");
}

#[tokio::test]
async fn test_translate_unsupported_language() {
    let fixture = fixture_bilingual().unwrap();
    let server = OasisMcpServer::new();

    let result = server
        .translate(Parameters(translate_params(
            &fixture,
            "common.back",
            Some("fr"),
        )))
        .await;

    assert!(result.is_err());
}
