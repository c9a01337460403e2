use anyhow::Result;
use geo_metric::{GeoAnalysis, console_summary};

use super::load_config;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::ScoreArgs) -> Result<()> {
    let mut config = load_config(&args.input)?;
    if let Some(output) = &args.output { config.output_dir = output.clone(); }
    if let Some(prefix) = &args.prefix { config.output_prefix = prefix.clone(); }

    let analysis = GeoAnalysis::from_config(&config, cli.verbose)?;

    if cli.verbose > 0 {
        eprintln!(
            "[score] running {} parties with min_cvs={} max_cvs={}",
            analysis.parties().len(), config.params.min_cvs, config.params.max_cvs
        );
    }
    let results = analysis.compute_all();

    if !args.quiet {
        for result in &results { println!("\n{}", console_summary(result)); }
    }

    let written = analysis.write_reports(&results, &config.output_dir, &config.output_prefix, args.json.as_deref(), cli.verbose)?;
    if cli.verbose > 0 { eprintln!("[score] wrote {} files", written.len()); }

    Ok(())
}
