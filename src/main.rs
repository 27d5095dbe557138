//! Resume analyzer: heuristic resume scoring with optional remote providers

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_analyzer::cli::{
    self, Cli, Commands, ConfigAction, PatternCategoryArg, RESUME_EXTENSIONS, TEXT_EXTENSIONS,
};
use resume_analyzer::output::{save_report_to_file, AnalysisReport, ReportGenerator};
use resume_analyzer::patterns::{library, KeywordFamily, SkillCategory};
use resume_analyzer::{AnalysisRequest, Config, InputManager, ResumeAnalyzer};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_title,
            industry,
            linkedin,
            user_id,
            local_only,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, RESUME_EXTENSIONS)
                .map_err(|e| anyhow::anyhow!("Resume file: {}", e))?;
            for path in [&job, &linkedin].into_iter().flatten() {
                cli::validate_file_extension(path, TEXT_EXTENSIONS)
                    .map_err(|e| anyhow::anyhow!("{}: {}", path.display(), e))?;
            }

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(anyhow::Error::msg)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager
                .extract_text(&resume)
                .await
                .with_context(|| format!("Failed to read resume {}", resume.display()))?;
            let job_text = input_manager
                .extract_optional(job.as_deref())
                .await
                .context("Failed to read job description")?;
            let linkedin_text = input_manager
                .extract_optional(linkedin.as_deref())
                .await
                .context("Failed to read LinkedIn summary")?;

            let mut request = AnalysisRequest::new(resume_text);
            if let Some(title) = job_title {
                request = request.with_job_title(title);
            }
            if let Some(industry) = industry {
                request = request.with_industry(industry);
            }
            if let Some(text) = job_text {
                request = request.with_job_description(text);
            }
            if let Some(text) = linkedin_text {
                request = request.with_linkedin_summary(text);
            }
            if let Some(user_id) = user_id {
                request = request.with_user_id(user_id);
            }

            let analyzer = ResumeAnalyzer::from_config(&config, local_only);
            info!("Strategy chain: {}", analyzer.strategy_names().join(" -> "));

            let spinner = spinner("Analyzing resume...");
            let started = Instant::now();
            let outcome = analyzer.analyze(&request).await;
            spinner.finish_and_clear();
            let outcome = outcome?;
            let elapsed_ms = started.elapsed().as_millis() as u64;

            let resume_name = resume
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| resume.display().to_string());
            let mut report = AnalysisReport::new(outcome, &resume_name, elapsed_ms);
            if detailed {
                report = report.with_local_details(&request);
            }

            let generator =
                ReportGenerator::with_options(config.output.color_output, detailed, true, true);
            println!("{}", generator.generate_report(&report, &output_format)?);

            if let Some(path) = save {
                let plain = ReportGenerator::with_options(false, detailed, true, true);
                let content = plain.generate_report(&report, &output_format)?;
                save_report_to_file(&content, &path)
                    .with_context(|| format!("Failed to save report to {}", path.display()))?;
                println!("Report saved to {}", path.display());
            }
        }

        Commands::Patterns { category } => print_patterns(category),

        Commands::Config { action } => {
            let path = config_path.unwrap_or_else(Config::config_path);
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("Configuration ({})\n", path.display());
                    println!("{}", toml::to_string_pretty(&config)?);
                    for provider in config.enabled_providers() {
                        let status = if provider.api_key().is_some() {
                            "configured".green()
                        } else {
                            format!("{} not set", provider.api_key_env).yellow()
                        };
                        println!("Provider {}: {}", provider.name, status);
                    }
                }

                Some(ConfigAction::Reset) => {
                    Config::default().save_to(&path)?;
                    println!("Configuration reset: {}", path.display());
                }

                Some(ConfigAction::Path) => println!("{}", path.display()),
            }
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn print_patterns(category: Option<PatternCategoryArg>) {
    let lib = library();
    let show = |wanted: PatternCategoryArg| category.is_none() || category == Some(wanted);

    let skill_sections = [
        (PatternCategoryArg::Technical, SkillCategory::Technical),
        (PatternCategoryArg::Soft, SkillCategory::Soft),
        (PatternCategoryArg::Industry, SkillCategory::Industry),
    ];
    for (arg, skill_category) in skill_sections {
        if show(arg) {
            print_families(&format!("{} skills", skill_category), lib.skill_families(skill_category));
        }
    }
    if show(PatternCategoryArg::Buzzwords) {
        print_families("Buzzwords", lib.buzzword_families());
    }
    if show(PatternCategoryArg::Verbs) {
        let verbs = lib.action_verbs();
        println!("\n{}", "Action verbs".bold());
        for (tier, words) in [
            ("high impact", verbs.high_impact),
            ("medium impact", verbs.medium_impact),
            ("low impact", verbs.low_impact),
            ("leadership", verbs.leadership),
        ] {
            println!("  {}: {}", tier.cyan(), words.join(", "));
        }
    }
}

fn print_families(title: &str, families: &[KeywordFamily]) {
    println!("\n{}", title.bold());
    for family in families {
        println!("  {}: {}", family.name.cyan(), family.keywords.join(", "));
    }
}
