use clap::Parser;
use colored::Colorize;
use std::error::Error;
use std::path::PathBuf;
use vlsm_subnet_planner::config::{
    load_plan, parse_requirement_arg, resolve_network, NETWORK_ENV,
};
use vlsm_subnet_planner::logging::{init_logging, LOG_CONFIG_FILE};
use vlsm_subnet_planner::output::{render, OutputFormat};
use vlsm_subnet_planner::{plan_subnets, RequirementInput};

/// Split an IPv4 network into VLSM subnets, largest requirement first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Major network, "192.168.1.0/24", or a bare address together with --prefix.
    /// Falls back to the --plan network, then VLSM_NETWORK
    network: Option<String>,

    /// Prefix length of the major network when NETWORK has no "/len"
    #[arg(short, long)]
    prefix: Option<u8>,

    /// Host requirement as [NAME=]COUNT, repeat for every segment
    #[arg(short = 'H', long = "hosts", allow_hyphen_values = true)]
    hosts: Vec<String>,

    /// JSON plan file with "network" and "requirements"
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "VLSM_FORMAT")]
    format: OutputFormat,
}

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = init_logging(LOG_CONFIG_FILE) {
        eprintln!("Error initializing log4rs: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    if let Err(e) = run(Args::parse()) {
        eprintln!("{} {e}", "error:".red());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut requirements: Vec<RequirementInput> = Vec::new();
    let mut plan_network = None;

    if let Some(path) = &args.plan {
        let plan = load_plan(path)?;
        plan_network = Some(plan.network);
        requirements.extend(plan.requirements);
    }
    for arg in &args.hosts {
        requirements.push(parse_requirement_arg(arg)?);
    }

    let env_network = std::env::var(NETWORK_ENV).ok();
    let network = resolve_network(
        args.network.as_deref(),
        args.prefix,
        plan_network,
        env_network.as_deref(),
    )?;

    let result = plan_subnets(network, &requirements)?;
    println!("{}", render(&result, args.format)?);
    Ok(())
}
