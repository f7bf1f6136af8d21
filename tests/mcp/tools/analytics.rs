use oasis::mcp::{
    OasisMcpServer,
    types::{GetAnalyticsParams, RecordCheckupParams},
};
use rmcp::handler::server::wrapper::Parameters;
use serde_json::Value;

use crate::{McpTestFixture, extract_tool_result_json};

async fn record(
    server: &OasisMcpServer,
    fixture: &McpTestFixture,
    category: &str,
    answers: &[f64],
) -> Value {
    let params = Parameters(RecordCheckupParams {
        project_root_path: fixture.root(),
        category: category.to_string(),
        answers: answers.to_vec(),
    });
    let result = server.record_checkup(params).await.unwrap();
    extract_tool_result_json(&result)
}

async fn analytics(server: &OasisMcpServer, fixture: &McpTestFixture) -> Value {
    let params = Parameters(GetAnalyticsParams {
        project_root_path: fixture.root(),
    });
    let result = server.get_analytics(params).await.unwrap();
    extract_tool_result_json(&result)
}

#[tokio::test]
async fn test_get_analytics_without_record() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    let json_result = analytics(&server, &fixture).await;

    assert_eq!(json_result["hasRecord"], false);
    assert!(json_result["analytics"].is_null());
}

#[tokio::test]
async fn test_record_checkup_persists_entry() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    let json_result = record(&server, &fixture, "#!/ocean/intro", &[40.0, 60.0, 65.0]).await;

    assert_eq!(json_result["persisted"], true);
    assert_eq!(json_result["entry"]["type"], "heights");
    assert_eq!(json_result["entry"]["kind"], "checkup");
    assert_eq!(json_result["entry"]["score"], 55);
    assert_eq!(json_result["entry"]["severity"], "moderate");
    assert!(
        fixture
            .root_path()
            .join(".oasis")
            .join("oasis_user.json")
            .exists()
    );
}

#[tokio::test]
async fn test_record_checkup_clamps_answers() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    let json_result = record(&server, &fixture, "darkness", &[-5.0, 120.0, 49.6]).await;

    assert_eq!(json_result["entry"]["answers"], serde_json::json!([0, 100, 50]));
    assert_eq!(json_result["entry"]["score"], 50);
}

#[tokio::test]
async fn test_record_checkup_unknown_experience() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    let params = Parameters(RecordCheckupParams {
        project_root_path: fixture.root(),
        category: "spiders".to_string(),
        answers: vec![50.0],
    });

    assert!(server.record_checkup(params).await.is_err());
}

#[tokio::test]
async fn test_get_analytics_after_checkups() {
    let fixture = McpTestFixture::new().unwrap();
    let server = OasisMcpServer::new();

    record(&server, &fixture, "airplane", &[80.0]).await;
    record(&server, &fixture, "airplane", &[40.0]).await;
    record(&server, &fixture, "thunder", &[30.0]).await;

    let json_result = analytics(&server, &fixture).await;

    assert_eq!(json_result["hasRecord"], true);
    let analytics = &json_result["analytics"];
    assert_eq!(analytics["totalSessions"], 3);

    let airplane = &analytics["byPhobia"][0];
    assert_eq!(airplane["type"], "airplane");
    assert_eq!(airplane["sessions"], 2);
    assert_eq!(airplane["firstScore"], 80);
    assert_eq!(airplane["latestScore"], 40);
    assert_eq!(airplane["improvement"], 40);
    assert_eq!(airplane["trend"], "improving");
    assert_eq!(airplane["avgScore"], 60);

    let recent = analytics["recentActivity"].as_array().unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0]["type"], "thunder");
    assert_eq!(recent[2]["score"], 80);
}
