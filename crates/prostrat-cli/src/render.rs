use std::collections::BTreeSet;

use prostrat_core::models::clinical::ClinicalInputs;
use prostrat_core::models::specimen::Specimen;
use prostrat_extract::ReportBatch;
use prostrat_scoring::all_endpoints;
use prostrat_scoring::nomogram::NomogramResult;
use serde::Serialize;
use tera::{Context, Tera};

const COMPARISON_TEMPLATE: &str = "\
| Sample | Location |{% for header in headers %} {{ header }} |{% endfor %}
|---|---|{% for header in headers %}---|{% endfor %}
{% for row in rows %}| {{ row.label }} | {{ row.location }} |{% for cell in row.cells %} {{ cell }} |{% endfor %}
{% endfor %}
DOB: {{ dob }}
NCCN risk: {{ worst_risk }} {{ details }}";

const NOMOGRAM_TEMPLATE: &str = "\
{% for line in lines %}{{ line }}
{% endfor %}{% if disclaimer %}{{ disclaimer }}
{% endif %}";

#[derive(Debug, Serialize)]
struct ComparisonRow {
    label: String,
    location: String,
    cells: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ComparisonView {
    headers: Vec<String>,
    rows: Vec<ComparisonRow>,
    dob: String,
    worst_risk: String,
    details: String,
}

/// Cell text for one specimen, with its tumor/core lengths appended.
fn specimen_cell(specimen: &Specimen) -> String {
    let summary = specimen.summary();
    if specimen.core_lengths.is_empty() {
        return summary;
    }
    let lengths: Vec<String> = specimen
        .core_lengths
        .iter()
        .map(|l| format!("{}/{}mm", l.tumor_mm, l.total_mm))
        .collect();
    format!("{summary} [cores: {}]", lengths.join(", "))
}

fn comparison_view(batch: &ReportBatch, clinical: &ClinicalInputs) -> ComparisonView {
    let headers = batch
        .reports
        .iter()
        .map(|r| format!("{} (NCCN: {})", r.collected_label(), r.risk_group))
        .collect();

    let labels: BTreeSet<char> = batch
        .reports
        .iter()
        .flat_map(|r| r.specimens.iter().map(|s| s.label))
        .collect();

    let rows = labels
        .into_iter()
        .map(|label| {
            let location = batch
                .reports
                .iter()
                .find_map(|r| r.specimen(label))
                .map_or_else(|| "N/A".to_string(), |s| s.location.clone());
            let cells = batch
                .reports
                .iter()
                .map(|r| r.specimen(label).map_or_else(|| "N/A".to_string(), specimen_cell))
                .collect();
            ComparisonRow {
                label: label.to_string(),
                location,
                cells,
            }
        })
        .collect();

    let gleason = batch
        .max_gleason_sum()
        .map_or_else(|| "?".to_string(), |g| g.to_string());

    ComparisonView {
        headers,
        rows,
        dob: batch
            .date_of_birth
            .map_or_else(|| "N/A".to_string(), |d| d.to_string()),
        worst_risk: batch
            .worst_risk()
            .map_or_else(|| "N/A".to_string(), |r| r.to_string()),
        details: format!(
            "(PSA={}, Gleason={gleason}, Stage={})",
            clinical.psa.numeric(),
            clinical.stage
        ),
    }
}

fn render(name: &str, template: &str, value: &impl Serialize) -> eyre::Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(name, template)?;
    let context = Context::from_serialize(value)?;
    Ok(tera.render(name, &context)?)
}

/// Plain-text comparison table: one row per specimen label, one column
/// per report (newest first).
pub fn render_comparison(batch: &ReportBatch, clinical: &ClinicalInputs) -> eyre::Result<String> {
    render(
        "comparison.txt",
        COMPARISON_TEMPLATE,
        &comparison_view(batch, clinical),
    )
}

#[derive(Debug, Serialize)]
struct NomogramView {
    lines: Vec<String>,
    disclaimer: Option<String>,
}

/// One line per endpoint in display order, then any disclaimer.
pub fn render_nomogram(result: &NomogramResult) -> eyre::Result<String> {
    let view = NomogramView {
        lines: all_endpoints()
            .iter()
            .map(|e| e.describe(&result.inputs))
            .collect(),
        disclaimer: result.disclaimer.clone(),
    };
    render("nomogram.txt", NOMOGRAM_TEMPLATE, &view)
}
