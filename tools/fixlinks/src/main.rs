//! Searches markdown files for broken local links and repairs them.
//!
//! Usage: fixlinks [--check] ./**/*.md

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;

use fixlinks::LinkFixer;

#[derive(Parser, Debug)]
#[command(name = "fixlinks", about = "Repair broken relative links in markdown files")]
struct Args {
    /// Report what would change without rewriting any file
    #[arg(long)]
    check: bool,

    /// Markdown files to scan; also the pool of candidate link targets
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut fixer = LinkFixer::new(&args.files);
    for (name, paths) in fixer.index().duplicates() {
        log::warn!("Duplicate filename: {}", name);
        for path in paths {
            log::warn!("- {}", path);
        }
    }

    let mut failed = false;
    for file in &args.files {
        match fixer.fix_file(file, !args.check) {
            Ok(true) if args.check => log::info!("{}: links would be rewritten", file),
            Ok(true) => log::info!("{}: links rewritten", file),
            Ok(false) => {}
            Err(e) => {
                log::error!("{}", e);
                failed = true;
            }
        }
    }

    log::info!("{:#?}", fixer.counts());
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
