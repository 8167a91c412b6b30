//! Command implementations for mathmysteryctl

use crate::display::{self, Palette};
use crate::quiz::{self, QuizSettings};
use anyhow::{Context, Result};
use mathmystery_common::{
    generate_with, FactorSet, Mode, MysteryConfig, ProblemView, RandomSource, SeededRandom,
    ThreadRandom,
};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_color: bool,
}

/// Load config from an explicit path, or the user/system/default chain
pub fn load_config(path: Option<&Path>) -> Result<MysteryConfig> {
    match path {
        Some(path) => MysteryConfig::load_from(path),
        None => MysteryConfig::load(),
    }
}

/// Seeded when a seed is known, otherwise the thread generator
pub fn session_rng(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded randomness");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(ThreadRandom),
    }
}

fn palette_for(config: &MysteryConfig, global: &GlobalOptions) -> Palette {
    if global.no_color {
        Palette::plain()
    } else {
        Palette::new(config.output.color)
    }
}

fn resolve_factors(flag: Option<&str>, config: &MysteryConfig) -> FactorSet {
    match flag {
        Some(text) => FactorSet::parse(text),
        None => config.practice.factor_set(),
    }
}

/// Generate one problem and print it with its explanations
pub fn problem(
    global: &GlobalOptions,
    factors: Option<String>,
    mode: Option<Mode>,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let config = load_config(global.config.as_deref())?;
    let factors = resolve_factors(factors.as_deref(), &config);
    let mode = mode.unwrap_or(config.practice.mode);
    let mut rng = session_rng(global.seed.or(config.practice.seed));

    let view = ProblemView::derive(generate_with(&factors, mode, &mut rng));

    if json {
        writeln!(out, "{}", view.to_json()?)?;
        return Ok(());
    }

    let palette = palette_for(&config, global);
    writeln!(out, "{}", display::render_prompt(&view.problem, &palette))?;
    writeln!(out, "{}", palette.dim(&format!("Answer: {}", view.problem.answer())))?;
    writeln!(out, "{}", display::render_view(&view, &palette))?;
    Ok(())
}

/// Run an interactive quiz on stdin
pub fn quiz(
    global: &GlobalOptions,
    factors: Option<String>,
    mode: Option<Mode>,
    rounds: Option<u32>,
) -> Result<quiz::QuizOutcome> {
    let config = load_config(global.config.as_deref())?;
    let settings = QuizSettings {
        factors: resolve_factors(factors.as_deref(), &config),
        mode: mode.unwrap_or(config.practice.mode),
        rounds: rounds.unwrap_or(config.practice.rounds),
        show_visuals: config.output.show_visuals,
    };
    info!(
        factors = %settings.factors,
        mode = %settings.mode,
        rounds = settings.rounds,
        "Starting quiz"
    );

    let palette = palette_for(&config, global);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    quiz::run_quiz(
        &settings,
        session_rng(global.seed.or(config.practice.seed)),
        &mut stdin.lock(),
        &mut stdout.lock(),
        &palette,
    )
}

/// Show how a factor list is parsed
pub fn factors(text: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let (set, report) = FactorSet::parse_with_report(text);

    if json {
        let value = serde_json::json!({ "factors": set, "report": report });
        writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        return Ok(());
    }

    writeln!(out, "Factors: {}", set)?;
    if !report.non_numeric.is_empty() {
        writeln!(out, "  Skipped (not a number): {}", report.non_numeric.join(", "))?;
    }
    if !report.out_of_range.is_empty() {
        let values: Vec<String> = report.out_of_range.iter().map(|v| v.to_string()).collect();
        writeln!(out, "  Skipped (outside 0-12): {}", values.join(", "))?;
    }
    if report.duplicates > 0 {
        writeln!(out, "  Repeats ignored: {}", report.duplicates)?;
    }
    if report.used_fallback {
        writeln!(out, "  Nothing usable, using the default factors")?;
    }
    Ok(())
}

/// Show or update the configuration file
pub fn config(global: &GlobalOptions, set: Option<String>, out: &mut impl Write) -> Result<()> {
    let mut config = load_config(global.config.as_deref())?;

    if let Some(assignment) = set {
        config.set(&assignment)?;
        let path = match &global.config {
            Some(path) => {
                config.save_to(path)?;
                path.clone()
            }
            None => config.save()?,
        };
        info!(path = %path.display(), "Saved configuration");
        writeln!(out, "Saved {}", path.display())?;
        return Ok(());
    }

    let text = toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
    write!(out, "{}", text)?;
    Ok(())
}
