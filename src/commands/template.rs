use std::path::PathBuf;

use anyhow::Result;

use crate::scaffold::{self, Layout, DEFAULT_TEMPLATE};

#[derive(clap::Args, Debug)]
pub struct Args {
    #[arg(long, default_value = ".")]
    root: PathBuf,
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,
    /// Overwrite an existing template
    #[arg(long)]
    force: bool,
}

pub fn entrypoint(args: &Args) -> Result<()> {
    let path = Layout::new(&args.root).resolve(&args.template);
    scaffold::write_starter(&path, args.force)?;
    println!("Wrote starter template to {}", path.display());
    Ok(())
}
