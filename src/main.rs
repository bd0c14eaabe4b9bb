//! fitrank: deterministic candidate scoring and ranking CLI

use clap::Parser;
use fitrank::cli::{self, Cli, Commands};
use fitrank::config::ScoringConfig;
use fitrank::eligibility::check_eligibility;
use fitrank::error::{FitRankError, Result};
use fitrank::explanation::generate_explanation;
use fitrank::jd::JdAnalyzer;
use fitrank::model::Candidate;
use fitrank::output::{ConsoleFormatter, JsonFormatter, OutputFormat, OutputFormatter, Report};
use fitrank::ranking::{find_candidate, rank_candidates};
use fitrank::roadmap::generate_roadmap;
use fitrank::taxonomy::SkillTaxonomy;
use log::{error, info};
use std::fs;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let format = match cli::parse_output_format(&cli.output) {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(!cli.no_color)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    };

    if let Err(e) = run_command(cli.command, &config, formatter.as_ref()) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<ScoringConfig> {
    let config = match &cli.config {
        Some(path) => ScoringConfig::load(path)?,
        None => ScoringConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn run_command(
    command: Commands,
    config: &ScoringConfig,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let taxonomy = SkillTaxonomy::new();
    let analyzer = JdAnalyzer::new(taxonomy);

    match command {
        Commands::Rank {
            candidates,
            job,
            id,
            top,
        } => {
            let pool = load_candidates(&candidates)?;
            let analysis = analyzer.analyze(&load_text(&job)?);
            let targets = target_skills(&analysis);
            info!(
                "ranking {} candidates for a {} role",
                pool.len(),
                analysis.role_type
            );

            let ids = if id.is_empty() { None } else { Some(id.as_slice()) };
            let mut ranked =
                rank_candidates(&pool, &targets, analysis.role_type, ids, &taxonomy, config);
            if let Some(top) = top {
                ranked.truncate(top);
            }
            print_report(formatter, &Report::Ranking(&ranked))
        }
        Commands::Check {
            candidates,
            job,
            id,
        } => {
            let pool = load_candidates(&candidates)?;
            let candidate = require_candidate(&pool, &id)?;
            let analysis = analyzer.analyze(&load_text(&job)?);
            let targets = target_skills(&analysis);

            let result =
                check_eligibility(candidate, &targets, analysis.role_type, &taxonomy, config);
            print_report(
                formatter,
                &Report::Eligibility {
                    candidate_name: &candidate.name,
                    result: &result,
                },
            )
        }
        Commands::Roadmap {
            candidates,
            job,
            id,
        } => {
            let pool = load_candidates(&candidates)?;
            let candidate = require_candidate(&pool, &id)?;
            let analysis = analyzer.analyze(&load_text(&job)?);
            let targets = target_skills(&analysis);

            let roadmap = generate_roadmap(candidate, &targets, &taxonomy, config);
            print_report(
                formatter,
                &Report::Roadmap {
                    candidate_name: &candidate.name,
                    roadmap: &roadmap,
                },
            )
        }
        Commands::Explain {
            candidates,
            job,
            id,
        } => {
            let pool = load_candidates(&candidates)?;
            let candidate = require_candidate(&pool, &id)?;
            let analysis = analyzer.analyze(&load_text(&job)?);
            let targets = target_skills(&analysis);

            // The rank comes from the candidate's position in the full pool.
            let ranked =
                rank_candidates(&pool, &targets, analysis.role_type, None, &taxonomy, config);
            let rank = ranked
                .iter()
                .find(|r| r.id == id)
                .map(|r| r.rank)
                .unwrap_or(0);

            let explanation = generate_explanation(
                candidate,
                &targets,
                analysis.role_type,
                rank,
                &taxonomy,
                config,
            );
            print_report(formatter, &Report::Explanation(&explanation))
        }
        Commands::AnalyzeJd { job } => {
            let analysis = analyzer.analyze(&load_text(&job)?);
            print_report(formatter, &Report::JdAnalysis(&analysis))
        }
    }
}

/// Target skills for scoring: mandatory first, then nice-to-have.
fn target_skills(analysis: &fitrank::jd::JdAnalysis) -> Vec<String> {
    analysis
        .mandatory_skills
        .iter()
        .chain(analysis.optional_skills.iter())
        .cloned()
        .collect()
}

fn load_candidates(path: &Path) -> Result<Vec<Candidate>> {
    let text = fs::read_to_string(path)?;
    let pool: Vec<Candidate> = serde_json::from_str(&text)?;
    if pool.is_empty() {
        return Err(FitRankError::InvalidInput(format!(
            "candidate pool {} is empty",
            path.display()
        )));
    }
    Ok(pool)
}

fn load_text(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(FitRankError::InvalidInput(format!(
            "job description {} is empty",
            path.display()
        )));
    }
    Ok(text)
}

fn require_candidate<'a>(pool: &'a [Candidate], id: &str) -> Result<&'a Candidate> {
    find_candidate(pool, id)
        .ok_or_else(|| FitRankError::InvalidInput(format!("no candidate with id '{}'", id)))
}

fn print_report(formatter: &dyn OutputFormatter, report: &Report) -> Result<()> {
    println!("{}", formatter.format(report)?);
    Ok(())
}
