use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    account::{checkup, clamp_score},
    config::load_config,
    context::{Overrides, ProjectContext},
    i18n::SwitchOutcome,
};

use super::types::{
    AnalyticsResult, ConfigDto, ConfigValues, GetAnalyticsParams, GetConfigParams,
    GetLocalesParams, LocaleInfo, LocalesResult, RecordCheckupParams, RecordCheckupResult,
    TranslateParams, TranslateResult,
};

#[derive(Clone)]
pub struct OasisMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for OasisMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_context(project_root_path: &str) -> Result<ProjectContext, McpError> {
    ProjectContext::new(PathBuf::from(project_root_path), &Overrides::default(), false)
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[tool_router]
impl OasisMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current oasis configuration
    #[tool(description = "Get the current oasis configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        json_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }

    /// List locale files and their key counts
    #[tool(
        description = "List the locale message files with the number of translated keys in each. Files that fail to parse are reported as warnings."
    )]
    pub async fn get_locales(
        &self,
        params: Parameters<GetLocalesParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;

        let scan = ctx.scan_messages().map_err(|e| {
            McpError::internal_error(format!("Failed to scan messages: {:#}", e), None)
        })?;

        let locales = scan
            .files
            .iter()
            .map(|file| LocaleInfo {
                locale: file.locale.clone(),
                file_path: file.path.to_string_lossy().to_string(),
                key_count: scan
                    .table
                    .locale(&file.locale)
                    .map_or(0, |root| root.leaf_count()),
                supported: ctx.config.supported_locales.contains(&file.locale),
            })
            .collect();

        json_result(&LocalesResult {
            messages_dir: ctx.messages_dir().to_string_lossy().to_string(),
            default_locale: ctx.config.default_locale.clone(),
            locales,
            warnings: scan
                .warnings
                .iter()
                .map(|w| format!("{}: {}", w.file_path, w.error))
                .collect(),
        })
    }

    /// Resolve a translation key
    #[tool(
        description = "Resolve a dotted translation key in the saved language (or `lang`), falling back to the default locale, and fill in {{name}} placeholders from `params`."
    )]
    pub async fn translate(
        &self,
        params: Parameters<TranslateParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let ctx = load_context(&params.project_root_path)?;
        let stored = ctx.session().language();
        let mut resolver = ctx.resolver(stored.as_deref(), None);

        if let Some(ref lang) = params.lang
            && resolver.switch_language(lang) == SwitchOutcome::Unsupported
        {
            return Err(McpError::invalid_params(
                format!(
                    "Unsupported language \"{}\" (supported: {})",
                    lang,
                    ctx.config.supported_locales.join(", ")
                ),
                None,
            ));
        }

        let resolved = resolver.try_resolve(&params.key, &params.params);
        json_result(&TranslateResult {
            found: resolved.is_some(),
            value: resolved.unwrap_or_else(|| params.key.clone()),
            lang: resolver.current_language().to_string(),
            key: params.key,
        })
    }

    /// Summarize the patient's progress
    #[tool(
        description = "Get progress analytics for the patient record: total sessions, per-experience first/latest/average score with trend, and the five most recent entries."
    )]
    pub async fn get_analytics(
        &self,
        params: Parameters<GetAnalyticsParams>,
    ) -> Result<CallToolResult, McpError> {
        let ctx = load_context(&params.0.project_root_path)?;
        let session = ctx.session();

        json_result(&AnalyticsResult {
            has_record: session.user().is_some(),
            analytics: session.analytics(),
        })
    }

    /// Record a post-experience checkup
    #[tool(
        description = "Record a post-experience checkup. Answers are slider values from 0 to 100; the score is their rounded mean. Creates a patient record if none exists."
    )]
    pub async fn record_checkup(
        &self,
        params: Parameters<RecordCheckupParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let Some(category) = checkup::experience_from_route(&params.category) else {
            return Err(McpError::invalid_params(
                format!(
                    "Unknown experience \"{}\" (expected one of: {})",
                    params.category,
                    checkup::CATEGORIES.join(", ")
                ),
                None,
            ));
        };

        let ctx = load_context(&params.project_root_path)?;
        let mut session = ctx.session();
        let answers = params.answers.iter().map(|&a| clamp_score(a)).collect();
        let recorded = session.record_checkup(category, answers);

        json_result(&RecordCheckupResult {
            entry: recorded.entry,
            persisted: recorded.persisted,
        })
    }
}

#[tool_handler]
impl ServerHandler for OasisMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Oasis MCP exposes the exposure-therapy site's translations and patient progress.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. get_locales - Get available locale files and their key counts\n\
                 3. translate - Resolve a translation key with fallback and parameters\n\
                 4. get_analytics - Get progress analytics for the patient record\n\
                 5. record_checkup - Record a post-experience checkup"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = OasisMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
