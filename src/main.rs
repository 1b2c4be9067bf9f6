use anyhow::{Context, Result};
use bzrwrapper::cli::{Args, Commands};
use bzrwrapper::config::Config;
use bzrwrapper::{Branch, BzrCli, BzrError, Commit};
use clap::Parser;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .init();
    }

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args) {
        // Not being a branch is reported, but is not a failure of the tool.
        if let Some(BzrError::NotABranch { .. }) = e.downcast_ref::<BzrError>() {
            eprintln!("no branch: {}", e);
            return Ok(());
        }
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(args.config_path.as_deref())?;
    let config = args.apply_to(config);
    log::debug!("Using config: {:?}", config);

    let path = match args.branch_path {
        Some(ref path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let branch = Branch::with_runner(&path, BzrCli::from_config(&config))?;

    match args.command {
        Commands::Info => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(branch.info())?);
            } else {
                println!("{}", branch.info());
            }
        }
        Commands::Log { .. } => {
            let options = args.log_options(&config)?;
            let log = branch
                .log_with(&options)
                .with_context(|| format!("Failed to read log of {}", path.display()))?;
            print_commits(log.commits(), args.json)?;
        }
        Commands::Last { count } => {
            let commits = branch
                .last_commits(count)
                .with_context(|| format!("Failed to read log of {}", path.display()))?;
            print_commits(commits, args.json)?;
        }
    }

    Ok(())
}

fn print_commits(commits: &[Commit], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(commits)?);
    } else {
        for commit in commits {
            println!("{}", commit);
        }
    }
    Ok(())
}
