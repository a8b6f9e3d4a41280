use std::io::Read;
use std::path::Path;

use jiff::civil::Date;
use prostrat_core::models::clinical::{ClinicalInputs, ClinicalStage, PsaInput, TherapyFlags};
use prostrat_core::models::grade::GradeGroup;
use prostrat_core::models::nomogram::{NomogramStage, RawNomogramInputs};
use prostrat_extract::{ReportBatch, parse_reports};
use prostrat_scoring::nomogram::inputs::{age_on, from_report};
use prostrat_scoring::nomogram::{NomogramResult, evaluate};
use prostrat_scoring::risk::classify_risk;
use serde::Serialize;

use crate::cli::{ClinicalArgs, ConfigArgs, ConfigCommand, NomogramArgs, OutputFormat, ParseArgs, RiskArgs};
use crate::config::{ProstratConfig, load_config_from, save_config_to};
use crate::render::{render_comparison, render_nomogram};

/// Read report text from a file, or stdin for `None` / `-`.
fn read_input(path: Option<&Path>) -> eyre::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .map_err(|e| eyre::eyre!("failed to read {}: {e}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Caller inputs from flags, falling back to config defaults.
pub fn clinical_inputs(args: &ClinicalArgs, config: &ProstratConfig) -> eyre::Result<ClinicalInputs> {
    let psa: PsaInput = args.psa.as_deref().unwrap_or(&config.default_psa).parse()?;
    let stage: ClinicalStage = args
        .stage
        .as_deref()
        .unwrap_or(&config.default_stage)
        .parse()?;
    Ok(ClinicalInputs {
        psa,
        stage,
        total_cores_override: args.total_cores,
        therapy: TherapyFlags {
            hormone: args.hormone,
            radiation: args.radiation,
        },
    })
}

fn today(arg: Option<&str>) -> eyre::Result<Date> {
    match arg {
        Some(s) => Ok(s.parse()?),
        None => Ok(jiff::Zoned::now().date()),
    }
}

/// Nomogram on the report at `index`, using the batch DOB for age.
pub fn nomogram_for_report(
    batch: &ReportBatch,
    index: usize,
    clinical: &ClinicalInputs,
    config: &ProstratConfig,
    today: Date,
) -> eyre::Result<NomogramResult> {
    let report = batch.reports.get(index).ok_or_else(|| {
        eyre::eyre!(
            "no report at index {index} ({} reports parsed)",
            batch.reports.len()
        )
    })?;

    let mut inputs = from_report(report, clinical, batch.date_of_birth, today);
    let dob = batch.date_of_birth.or(report.date_of_birth);
    if dob.and_then(|d| age_on(d, today)).is_none() {
        inputs.age = config.default_age;
    }
    Ok(evaluate(inputs, clinical.therapy))
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    #[serde(flatten)]
    batch: &'a ReportBatch,
    worst_risk: Option<String>,
    nomogram: Option<NomogramResult>,
}

pub fn parse(args: &ParseArgs, config: &ProstratConfig) -> eyre::Result<String> {
    let text = read_input(args.input.as_deref())?;
    let clinical = clinical_inputs(&args.clinical, config)?;
    let mut policy = config.aggregation_policy();
    if let Some(cores) = args.systematic_cores {
        policy.systematic_cores = cores;
    }

    let batch = parse_reports(&text, &clinical, &policy)?;

    let nomogram = match args.nomogram {
        Some(index) => {
            let today = today(args.today.as_deref())?;
            Some(nomogram_for_report(&batch, index, &clinical, config, today)?)
        }
        None => None,
    };

    match args.format {
        OutputFormat::Json => {
            let output = ParseOutput {
                batch: &batch,
                worst_risk: batch.worst_risk().map(|r| r.to_string()),
                nomogram,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Table => {
            let mut out = render_comparison(&batch, &clinical)?;
            if let Some(result) = nomogram {
                out.push_str("\n\n");
                out.push_str(&render_nomogram(&result)?);
            }
            Ok(out)
        }
    }
}

pub fn risk(args: &RiskArgs) -> eyre::Result<String> {
    let grade_group = GradeGroup::new(args.grade_group)?;
    let stage = ClinicalStage::new(&args.stage);
    let group = classify_risk(
        args.psa,
        grade_group,
        &stage,
        args.positive_cores,
        args.total_cores,
    );
    tracing::debug!(risk = %group, "classified risk");
    Ok(group.to_string())
}

pub fn nomogram(args: &NomogramArgs, config: &ProstratConfig) -> eyre::Result<String> {
    let stage = args
        .stage
        .as_deref()
        .map(str::parse::<NomogramStage>)
        .transpose()?;
    let raw = RawNomogramInputs {
        age: args.age.or(Some(f64::from(config.default_age))),
        psa: args.psa,
        grade_group: args.grade_group,
        stage,
        positive_cores: args.positive_cores,
        negative_cores: args.negative_cores,
    };
    let therapy = TherapyFlags {
        hormone: args.hormone,
        radiation: args.radiation,
    };
    let result = evaluate(raw.resolve(), therapy);

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => render_nomogram(&result),
    }
}

pub fn config(args: &ConfigArgs, path: &Path) -> eyre::Result<String> {
    match args.command {
        ConfigCommand::Show => {
            let config = load_config_from(path)?;
            Ok(serde_json::to_string_pretty(&config)?)
        }
        ConfigCommand::Path => Ok(path.display().to_string()),
        ConfigCommand::Init => {
            if path.exists() {
                return Ok(format!("config already exists at {}", path.display()));
            }
            save_config_to(path, &ProstratConfig::default())?;
            Ok(format!("wrote default config to {}", path.display()))
        }
    }
}
