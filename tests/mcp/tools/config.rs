use oasis::mcp::{
    OasisMcpServer,
    types::{GetConfigParams, GetLocalesParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;

use crate::{McpTestFixture, extract_tool_result_json};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({}))]).unwrap();
    let server = OasisMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "./messages");
    assert_eq!(json_result["config"]["defaultLocale"], "en");
    assert_eq!(json_result["config"]["supportedLocales"], json!(["en", "ko"]));
    assert_eq!(json_result["config"]["dataDir"], "./.oasis");
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_oasisrc() {
    let fixture = McpTestFixture::new().unwrap();

    fixture
        .write_config(&json!({
            "messagesDir": "locales",
            "defaultLocale": "ko",
            "supportedLocales": ["ko", "en", "ja"]
        }))
        .unwrap();

    let server = OasisMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["messagesRoot"], "locales");
    assert_eq!(json_result["config"]["defaultLocale"], "ko");
    assert_eq!(json_result["config"]["supportedLocales"], json!(["ko", "en", "ja"]));
    assert_eq!(json_result["fromFile"], true);
}

#[tokio::test]
async fn test_get_config_invalid_default_locale() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "defaultLocale": "fr",
            "supportedLocales": ["en", "ko"]
        }))
        .unwrap();

    let server = OasisMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await;
    assert!(result.is_err(), "config naming an unsupported default should fail");
}

// ============================================================================
// get_locales tests
// ============================================================================

#[tokio::test]
async fn test_get_locales_single() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({"key": "value"}))]).unwrap();

    let server = OasisMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["defaultLocale"], "en");
    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 1);
    assert_eq!(locales[0]["locale"], "en");
    assert!(
        locales[0]["filePath"]
            .as_str()
            .unwrap()
            .ends_with("en.json")
    );
    assert_eq!(locales[0]["keyCount"], 1);
    assert_eq!(locales[0]["supported"], true);
}

#[tokio::test]
async fn test_get_locales_multiple() {
    let fixture = McpTestFixture::with_messages(vec![
        ("en", json!({"a": "1", "b": {"c": "2", "d": "3"}})),
        ("ko", json!({"a": "일", "b": {"c": "이"}})),
        ("ja", json!({"a": "壱"})),
    ])
    .unwrap();

    let server = OasisMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 3);

    let en = locales.iter().find(|l| l["locale"] == "en").unwrap();
    assert_eq!(en["keyCount"], 3);

    let ko = locales.iter().find(|l| l["locale"] == "ko").unwrap();
    assert_eq!(ko["keyCount"], 2);

    let ja = locales.iter().find(|l| l["locale"] == "ja").unwrap();
    assert_eq!(ja["keyCount"], 1);
    assert_eq!(ja["supported"], false);
}

#[tokio::test]
async fn test_get_locales_reports_unparseable_files() {
    let fixture = McpTestFixture::with_messages(vec![("en", json!({"a": "1"}))]).unwrap();
    fixture.write_file("messages/ko.json", "{\"a\": ").unwrap();

    let server = OasisMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["locales"].as_array().unwrap().len(), 1);
    let warnings = json_result["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].as_str().unwrap().contains("ko.json"));
}

#[tokio::test]
async fn test_get_locales_empty_messages_dir() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    let params = Parameters(GetLocalesParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_locales(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let locales = json_result["locales"].as_array().unwrap();
    assert_eq!(locales.len(), 0);
}
