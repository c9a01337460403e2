use anyhow::Result;
use geo_metric::GeoAnalysis;

use super::load_config;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::StatsArgs) -> Result<()> {
    let config = load_config(&args.input)?;
    let analysis = GeoAnalysis::from_config(&config, cli.verbose)?;
    let party = analysis.shares().party(&args.party)?.clone();

    if cli.verbose > 0 {
        let margin = analysis.initial_state(&party).margin;
        eprintln!("[stats] party {party}: neighborhood margin σ = {margin:.5}");
    }

    print!("{}", analysis.state_csv(&party, args.after)?);
    Ok(())
}
