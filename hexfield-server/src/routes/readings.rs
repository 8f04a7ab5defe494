//! Query endpoints: /hex, /bbox, /avg
//!
//! Each handler parses its query parameters, invokes one query-engine
//! operation against the shared dataset, and marshals the rows. All
//! query-engine failures are caller-input errors and surface as 400 with
//! a detail message (see `error.rs`).

use crate::error::{Result, ServerError};
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use hexfield_core::{grid, parse_border, query, AggregateRow, Reading};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One reading on the wire. `h3_index` is the cell's canonical hex
/// string; `cell_id` keeps the original service's name for the category
/// tag.
#[derive(Serialize)]
pub struct ReadingRow {
    pub h3_index: String,
    pub level: i32,
    pub cell_id: u32,
}

impl From<&Reading> for ReadingRow {
    fn from(reading: &Reading) -> Self {
        Self {
            h3_index: reading.cell.to_string(),
            level: reading.level,
            cell_id: reading.category_id,
        }
    }
}

fn to_rows(readings: &[Reading]) -> Vec<ReadingRow> {
    readings.iter().map(ReadingRow::from).collect()
}

#[derive(Deserialize)]
pub struct HexParams {
    pub parent_hex: Option<String>,
}

/// Readings under an ancestor cell
///
/// GET /hex?parent_hex=<cell>
pub async fn hex(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HexParams>,
) -> Result<Json<Vec<ReadingRow>>> {
    let raw = params
        .parent_hex
        .ok_or(ServerError::MissingParam("parent_hex"))?;
    let parent = grid::cell_from_str(&raw)?;

    let readings = query::descendants(&state.dataset, parent);
    tracing::debug!(parent = %parent, matched = readings.len(), "hex query");
    Ok(Json(to_rows(&readings)))
}

#[derive(Deserialize)]
pub struct BboxParams {
    pub border: Option<String>,
}

/// Readings inside a polygon border
///
/// GET /bbox?border=<lat1/lon1,lat2/lon2,...>
///
/// At least 3 points; the ring is closed implicitly when first ≠ last.
pub async fn bbox(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BboxParams>,
) -> Result<Json<Vec<ReadingRow>>> {
    let raw = params.border.ok_or(ServerError::MissingParam("border"))?;
    let border = parse_border(&raw)?;

    let readings = query::within_polygon(&state.dataset, &border)?;
    tracing::debug!(points = border.len(), matched = readings.len(), "bbox query");
    Ok(Json(to_rows(&readings)))
}

#[derive(Deserialize)]
pub struct AvgParams {
    pub resolution: Option<i64>,
}

/// One aggregation row on the wire.
#[derive(Serialize)]
pub struct AggregateRowBody {
    pub h3_index: String,
    pub cell_id: u32,
    pub median_level: i32,
}

impl From<&AggregateRow> for AggregateRowBody {
    fn from(row: &AggregateRow) -> Self {
        Self {
            h3_index: row.cell.to_string(),
            cell_id: row.category_id,
            median_level: row.median_level,
        }
    }
}

/// Aggregation response envelope.
#[derive(Serialize)]
pub struct AggregateResponse {
    pub data: Vec<AggregateRowBody>,
}

/// Median level per (ancestor cell, category) at a resolution
///
/// GET /avg?resolution=<0..12>
pub async fn avg(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AvgParams>,
) -> Result<Json<AggregateResponse>> {
    let resolution = params
        .resolution
        .ok_or(ServerError::MissingParam("resolution"))?;

    let rows = query::aggregate(&state.dataset, resolution)?;
    tracing::debug!(resolution, groups = rows.len(), "avg query");
    Ok(Json(AggregateResponse {
        data: rows.iter().map(AggregateRowBody::from).collect(),
    }))
}
