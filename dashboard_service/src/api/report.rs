use crate::api::context::AppState;
use crate::api::error::ApiError;
use crate::api::extract::Json;
use anyhow::Context;
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, header},
    response::IntoResponse,
    routing::post,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Rows the client-side table wants exported, verbatim. Columns are the
/// union of keys across rows in first-seen order.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportRequest {
    /// download name without extension; defaults to "report"
    pub filename: Option<String>,
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<serde_json::Map<String, Value>>,
}

impl ReportRequest {
    fn validated(self) -> Result<(String, Vec<serde_json::Map<String, Value>>), ApiError> {
        if self.rows.is_empty() {
            return Err(ApiError::Validation("rows must not be empty".to_string()));
        }
        let filename = self
            .filename
            .as_deref()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or("report");
        // quotes and control characters would corrupt the quoted
        // Content-Disposition value
        let filename: String = filename
            .chars()
            .filter(|c| !c.is_control() && *c != '"')
            .collect();
        let filename = if filename.is_empty() {
            "report".to_string()
        } else {
            filename
        };
        Ok((filename, self.rows))
    }
}

/// Union of keys across rows, keeping the order each key was first seen
fn column_order(rows: &[serde_json::Map<String, Value>]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Strings render verbatim, scalars via display, missing/null as empty, and
/// anything nested as compact json text
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(nested) => nested.to_string(),
    }
}

fn attachment_headers(filename: &str, content_type: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        content_type.parse().context("invalid content type")?,
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .context("invalid content disposition")?,
    );
    Ok(headers)
}

#[utoipa::path(
    post,
    tag = "reports",
    path = "/api/reports/csv",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "csv file download", content_type = "text/csv"),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(_ctx, req))]
pub async fn export_csv(
    State(_ctx): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (filename, rows) = req.validated()?;
    let columns = column_order(&rows);

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(&columns)
        .context("unable to write csv header")?;
    for row in &rows {
        writer
            .write_record(columns.iter().map(|column| render_cell(row.get(column))))
            .context("unable to write csv row")?;
    }
    let bytes = writer
        .into_inner()
        .context("unable to finish csv output")?;

    let headers = attachment_headers(&format!("{filename}.csv"), "text/csv")?;
    Ok((headers, bytes))
}

#[utoipa::path(
    post,
    tag = "reports",
    path = "/api/reports/excel",
    request_body = ReportRequest,
    responses(
        (
            status = 200,
            description = "xlsx file download",
            content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        ),
        (status = 400, body = model::ErrorResponse),
    )
)]
#[tracing::instrument(skip(_ctx, req))]
pub async fn export_excel(
    State(_ctx): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (filename, rows) = req.validated()?;
    let columns = column_order(&rows);

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, column) in columns.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, column)
            .context("unable to write xlsx header")?;
    }
    for (row_index, row) in rows.iter().enumerate() {
        for (col, column) in columns.iter().enumerate() {
            worksheet
                .write_string(
                    (row_index + 1) as u32,
                    col as u16,
                    render_cell(row.get(column)),
                )
                .context("unable to write xlsx cell")?;
        }
    }
    let bytes = workbook
        .save_to_buffer()
        .context("unable to finish xlsx output")?;

    let headers = attachment_headers(
        &format!("{filename}.xlsx"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    )?;
    Ok((headers, bytes))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reports/csv", post(export_csv))
        .route("/reports/excel", post(export_excel))
}
