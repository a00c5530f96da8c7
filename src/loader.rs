//! Design table loader.
//!
//! Reads the comma-separated design table:
//!
//! ```text
//! L_D,M_empty,MTOW,Stall      <- metric names; column order = metric id
//! false,true,true,true        <- true = minimize, false = maximize
//! 14.2,310.5,520.0,21.3       <- design 0
//! 13.8,298.1,505.2,22.0       <- design 1
//! ```
//!
//! A design's id is its data row: the file line minus the two headers,
//! counted from zero. Blank lines after the headers produce no design but
//! still count as rows, so ids keep pointing at the file. The loader only
//! consumes text; opening files is left to the caller.

use std::io::BufRead;

use tracing::trace;

use crate::design::{Design, MetricRegistry, PerfMetric, Sense};
use crate::error::{MdrError, Result};

/// Lines taken by the name and orientation headers.
const HEADER_LINES: usize = 2;

/// Metrics and designs parsed from one table.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBatch {
    /// Metric names in column order.
    pub registry: MetricRegistry,
    /// One design per non-blank data row; design id = data row index.
    pub designs: Vec<Design>,
}

/// Parses a design table held in memory.
///
/// Every design gets `rank_layers` zeroed rank counters.
///
/// # Example
///
/// ```
/// use u_mdr::loader::parse_designs;
///
/// let batch = parse_designs("mass,lift\ntrue,false\n3.0,1.5\n2.0,1.0\n", 0).unwrap();
/// assert_eq!(batch.registry.name_of(1), Some("lift"));
/// assert_eq!(batch.designs.len(), 2);
/// assert_eq!(batch.designs[1].id(), 1);
/// assert!(!batch.designs[0].metrics()[1].is_minimized());
/// ```
pub fn parse_designs(text: &str, rank_layers: usize) -> Result<LoadedBatch> {
    read_designs(text.as_bytes(), rank_layers)
}

/// Parses a design table from any buffered reader.
///
/// # Errors
///
/// [`MdrError::Parse`] with the 1-based line number for missing headers,
/// duplicate metric names, orientation tokens other than `true`/`false`
/// (case-insensitive), rows with the wrong number of columns, values that
/// are not numbers, and read failures.
pub fn read_designs<R: BufRead>(reader: R, rank_layers: usize) -> Result<LoadedBatch> {
    let mut lines = reader.lines().enumerate().map(|(i, line)| {
        let line_no = i + 1;
        line.map(|l| (line_no, l))
            .map_err(|e| MdrError::parse(line_no, e.to_string()))
    });

    let (_, names_line) = lines
        .next()
        .transpose()?
        .ok_or_else(|| MdrError::parse(1, "missing metric name header"))?;
    let registry = parse_names(&names_line)?;

    let (_, senses_line) = lines
        .next()
        .transpose()?
        .ok_or_else(|| MdrError::parse(2, "missing minimize flag header"))?;
    let senses = parse_senses(&senses_line, registry.len())?;

    let mut designs = Vec::new();
    for line in lines {
        let (line_no, text) = line?;
        if text.trim().is_empty() {
            continue;
        }
        let id = line_no - HEADER_LINES - 1;
        let design = parse_row(&text, line_no, id, &senses)?.with_rank_layers(rank_layers);
        trace!(design = design.id(), line = line_no, "parsed design");
        designs.push(design);
    }

    Ok(LoadedBatch { registry, designs })
}

fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}

fn parse_names(line: &str) -> Result<MetricRegistry> {
    let mut registry = MetricRegistry::new();
    for name in fields(line) {
        if name.is_empty() {
            return Err(MdrError::parse(1, "empty metric name"));
        }
        registry
            .register(name)
            .map_err(|e| MdrError::parse(1, e.to_string()))?;
    }
    Ok(registry)
}

fn parse_senses(line: &str, expected: usize) -> Result<Vec<Sense>> {
    let senses = fields(line)
        .map(|token| {
            if token.eq_ignore_ascii_case("true") {
                Ok(Sense::Minimize)
            } else if token.eq_ignore_ascii_case("false") {
                Ok(Sense::Maximize)
            } else {
                Err(MdrError::parse(
                    2,
                    format!("expected `true` or `false`, found `{token}`"),
                ))
            }
        })
        .collect::<Result<Vec<_>>>()?;

    if senses.len() != expected {
        return Err(MdrError::parse(
            2,
            format!("{} minimize flags for {expected} metrics", senses.len()),
        ));
    }
    Ok(senses)
}

fn parse_row(line: &str, line_no: usize, id: usize, senses: &[Sense]) -> Result<Design> {
    let metrics = fields(line)
        .enumerate()
        .map(|(col, token)| -> Result<PerfMetric> {
            let sense = senses.get(col).copied().ok_or_else(|| {
                MdrError::parse(line_no, format!("more than {} values", senses.len()))
            })?;
            let value: f64 = token
                .parse()
                .map_err(|_| MdrError::parse(line_no, format!("`{token}` is not a number")))?;
            Ok(PerfMetric::new(col, value, sense))
        })
        .collect::<Result<Vec<_>>>()?;

    if metrics.len() != senses.len() {
        return Err(MdrError::parse(
            line_no,
            format!("{} values for {} metrics", metrics.len(), senses.len()),
        ));
    }
    Ok(Design::new(id, metrics))
}
