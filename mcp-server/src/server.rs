//! Clínica MCP Server implementation
//!
//! One tool per REST endpoint. The API must be running; its URL comes from
//! `CLINICA_API_URL`.

use crate::client::ClinicaClient;
use anyhow::Result;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

/// Clínica MCP Server
#[derive(Clone)]
pub struct ClinicaServer {
    client: ClinicaClient,
    tool_router: ToolRouter<Self>,
}

impl ClinicaServer {
    pub fn from_env() -> Result<Self> {
        let client = ClinicaClient::from_env()?;
        Ok(Self::new(client))
    }

    pub fn new(client: ClinicaClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }
}

fn to_result(result: Result<String>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(body) => Ok(CallToolResult::success(vec![Content::text(body)])),
        Err(e) => Ok(CallToolResult::error(vec![Content::text(e.to_string())])),
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct RunParams {
    /// Patient RUN without check digit (e.g. 11111111)
    pub run: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AtencionParams {
    /// Attention identifier
    pub id_atencion: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ReporteParams {
    /// Minimum attention cost (optional, defaults to 0)
    #[serde(default)]
    pub monto: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ProcedureParams {
    /// First procedure argument
    pub param1: String,
    /// Second procedure argument
    pub param2: String,
}

#[tool_router]
impl ClinicaServer {
    #[tool(description = "Check the API and its database connection.")]
    async fn health(&self) -> Result<CallToolResult, McpError> {
        to_result(self.client.health().await)
    }

    // === Pacientes ===

    #[tool(description = "List all patients ordered by RUN.")]
    async fn list_pacientes(&self) -> Result<CallToolResult, McpError> {
        to_result(self.client.list_pacientes().await)
    }

    #[tool(description = "Get one patient by RUN.")]
    async fn get_paciente(&self, params: Parameters<RunParams>) -> Result<CallToolResult, McpError> {
        to_result(self.client.get_paciente(params.0.run).await)
    }

    #[tool(description = "Delete a patient by RUN. Their attentions are deleted with them.")]
    async fn delete_paciente(
        &self,
        params: Parameters<RunParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.delete_paciente(params.0.run).await)
    }

    // === Cálculos ===

    #[tool(description = "Compute the patient's copayment for an attention.")]
    async fn copago(&self, params: Parameters<AtencionParams>) -> Result<CallToolResult, McpError> {
        to_result(self.client.copago(params.0.id_atencion).await)
    }

    #[tool(description = "Compute the final amount of an attention after discounts.")]
    async fn monto_final(
        &self,
        params: Parameters<AtencionParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.monto_final(params.0.id_atencion).await)
    }

    #[tool(description = "List attentions whose cost is at least 'monto', most expensive first.")]
    async fn reporte_costosas(
        &self,
        params: Parameters<ReporteParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(self.client.reporte_costosas(params.0.monto).await)
    }

    // === Procedimiento ===

    #[tool(description = "Run the configured database procedure with two arguments.")]
    async fn execute_procedure(
        &self,
        params: Parameters<ProcedureParams>,
    ) -> Result<CallToolResult, McpError> {
        to_result(
            self.client
                .execute_procedure(&params.0.param1, &params.0.param2)
                .await,
        )
    }
}

#[tool_handler]
impl ServerHandler for ClinicaServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "clinica".into(),
                title: Some("Clínica MCP Server".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"Clínica - patient records and billing calculations

Start with 'health'. If the database is disconnected every other tool fails with 503.

TOOLS:
- 'list_pacientes' / 'get_paciente' / 'delete_paciente' - patient records by RUN
- 'copago' - copayment for an attention (cost minus insurer coverage)
- 'monto_final' - attention cost minus discount
- 'reporte_costosas' - attentions costing at least 'monto'
- 'execute_procedure' - generic two-argument database procedure

Errors come back as 'API error (<status>): {"error": ..., "details": ...}'."#
                    .into(),
            ),
        }
    }
}
