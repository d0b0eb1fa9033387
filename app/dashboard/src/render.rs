//! FILENAME: app/dashboard/src/render.rs
// PURPOSE: Presentation boundary. Turns DashboardTables into four chart slots
// and hands them to an adapter. Real charting lives outside this crate; the
// adapters here write plain text or JSON.

use std::io::Write;

use sales_engine::{AggregateTable, ChartKind, DashboardTables, Dimension};
use serde::Serialize;

use crate::AppError;

// ============================================================================
// CHART SLOTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// One chart: title, kind, column names, axis label and its (category, value) points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlot {
    pub title: &'static str,
    pub kind: ChartKind,
    pub category_column: &'static str,
    pub value_column: &'static str,
    pub value_label: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSlot {
    fn from_table<K: ToString>(table: &AggregateTable<K>) -> Self {
        let dimension: Dimension = table.dimension;
        ChartSlot {
            title: dimension.title(),
            kind: dimension.chart_kind(),
            category_column: dimension.category_column(),
            value_column: dimension.value_column(),
            value_label: dimension.value_label(),
            points: table
                .rows()
                .iter()
                .map(|row| ChartPoint {
                    label: row.category.to_string(),
                    value: row.value,
                })
                .collect(),
        }
    }
}

/// The four slots in page order: genre, platform, region, year.
pub fn chart_slots(tables: &DashboardTables) -> Vec<ChartSlot> {
    vec![
        ChartSlot::from_table(&tables.by_genre),
        ChartSlot::from_table(&tables.by_platform),
        ChartSlot::from_table(&tables.by_region),
        ChartSlot::from_table(&tables.by_year),
    ]
}

// ============================================================================
// ADAPTERS
// ============================================================================

/// Draws a full set of dashboard tables.
pub trait PresentationAdapter {
    fn render(&mut self, tables: &DashboardTables) -> Result<(), AppError>;
}

/// Aligned text tables, one per chart, followed by a one-line summary.
pub struct TextAdapter<W: Write> {
    out: W,
}

impl<W: Write> TextAdapter<W> {
    pub fn new(out: W) -> Self {
        TextAdapter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_slot(&mut self, slot: &ChartSlot) -> std::io::Result<()> {
        let kind = match slot.kind {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        };
        writeln!(self.out, "== {} ({}) ==", slot.title, kind)?;

        if slot.points.is_empty() {
            writeln!(self.out, "(no data)")?;
            return writeln!(self.out);
        }

        let width = slot
            .points
            .iter()
            .map(|p| p.label.chars().count())
            .chain(std::iter::once(slot.category_column.len()))
            .max()
            .unwrap_or(0);

        writeln!(self.out, "{:<width$}  {}", slot.category_column, slot.value_column, width = width)?;
        for point in &slot.points {
            writeln!(self.out, "{:<width$}  {:.2}", point.label, point.value, width = width)?;
        }
        writeln!(self.out)
    }
}

impl<W: Write> PresentationAdapter for TextAdapter<W> {
    fn render(&mut self, tables: &DashboardTables) -> Result<(), AppError> {
        for slot in chart_slots(tables) {
            self.write_slot(&slot)?;
        }
        writeln!(
            self.out,
            "{} records match the current filters (sales in millions of units).",
            tables.filtered_rows
        )?;
        self.out.flush()?;
        Ok(())
    }
}

/// One JSON document per render: `{"filtered_rows": n, "charts": [...]}`.
pub struct JsonAdapter<W: Write> {
    out: W,
}

#[derive(Serialize)]
struct JsonFrame {
    filtered_rows: usize,
    charts: Vec<ChartSlot>,
}

impl<W: Write> JsonAdapter<W> {
    pub fn new(out: W) -> Self {
        JsonAdapter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PresentationAdapter for JsonAdapter<W> {
    fn render(&mut self, tables: &DashboardTables) -> Result<(), AppError> {
        let frame = JsonFrame {
            filtered_rows: tables.filtered_rows,
            charts: chart_slots(tables),
        };
        serde_json::to_writer(&mut self.out, &frame)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
