use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::scaffold::{self, Cargo, Layout, Options, Policy, Scaffold, DEFAULT_TEMPLATE};

#[derive(clap::Args, Debug)]
pub struct Args {
    /// Workspace holding the day projects
    #[arg(long, default_value = ".")]
    root: PathBuf,
    /// Template file, relative to the workspace
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// Program used for `init` and `add`
    #[arg(long, default_value = "cargo")]
    cargo: PathBuf,
    /// Ignore `day*` entries without a number instead of restarting at day1
    #[arg(long)]
    skip_malformed: bool,
    /// Print the next day and its files without creating anything
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn options(&self) -> Options {
        Options {
            template: self.template.clone(),
            policy: if self.skip_malformed {
                Policy::Lenient
            } else {
                Policy::Strict
            },
        }
    }
}

fn print_files(scaffold: &Scaffold) {
    for file in &scaffold.placeholders {
        println!("  {}", file.display());
    }
    println!("  {}", scaffold.main_source.display());
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let layout = Layout::new(&args.root);
    let options = args.options();

    if args.dry_run {
        let scaffold = scaffold::plan(&layout, &options)?;
        println!("Next day: {}", scaffold.day());
        print_files(&scaffold);
        return Ok(());
    }

    let scaffold = scaffold::initialize_next_day(&layout, &options, &Cargo::new(&args.cargo))
        .with_context(|| format!("failed to scaffold next day in {}", args.root.display()))?;
    if scaffold.numbering.fell_back {
        println!("No earlier days found, starting over");
    }
    println!(
        "Created {} at {}",
        scaffold.day(),
        scaffold.project_dir.display()
    );
    print_files(&scaffold);
    Ok(())
}
