use clap::Parser;
use envroot_core::environment::ProcessEnvironment;
use envroot_core::error::Result;
use envroot_core::execution::LaunchPlan;
use envroot_core::probe::SystemProbe;
use envroot_core::resolution::resolve;
use itertools::Itertools;
use log::debug;
use std::path::Path;
use std::process::ExitCode;

use crate::cli_args::Args;

mod cli_args;

fn print_dry_run(plan: &LaunchPlan) {
    println!("Executable:\n{}", Path::new(plan.path()).display());
    println!(
        "Arguments:\n{}",
        plan.argv().iter().map(|argument| format!("{argument:?}")).join(" ")
    );
}

fn execute() -> Result<()> {
    let args = Args::parse();
    let (template, arguments) = args.split_command()?;

    let resolution = resolve(template, &ProcessEnvironment, &SystemProbe)?;
    debug!("Resolved by {}", resolution.strategy);

    let plan = LaunchPlan::new(resolution, arguments.to_vec());

    if args.dry_run {
        print_dry_run(&plan);
        return Ok(());
    }

    Err(plan.exec())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("envroot: {e}");
            ExitCode::FAILURE
        }
    }
}
