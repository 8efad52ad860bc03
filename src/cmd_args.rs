use std::ffi::OsString;
use std::path::PathBuf;

use crate::platform::types::Space;
pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// File to load into the in-memory editor. `~` and env vars are expanded.
    #[clap(short = 'f', long, help = "file to edit")]
    file: Option<String>,

    /// Collapsed line ranges, START:END (0-based, inclusive)
    #[clap(long = "fold", value_parser = parse_fold, help = "fold START:END")]
    folds: Vec<(usize, usize)>,

    /// Coordinate space the console starts in
    #[clap(short = 's', long, default_value = "logical", help = "initial space")]
    space: Space,
}

fn parse_fold(value: &str) -> Result<(usize, usize), String> {
    let (start, end) = value
        .split_once(':')
        .ok_or_else(|| format!("expected START:END, got '{value}'"))?;
    let start = start
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad fold start '{start}': {e}"))?;
    let end = end
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("bad fold end '{end}': {e}"))?;
    if end <= start {
        return Err(format!("fold end {end} must be after start {start}"));
    }
    Ok((start, end))
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    file: Option<PathBuf>,
    folds: Vec<(usize, usize)>,
    space: Space,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let file = args
            .file
            .map(|path| PathBuf::from(shellexpand::tilde(&path).into_owned()));
        Self {
            file,
            folds: args.folds,
            space: args.space,
        }
    }

    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    pub fn folds(&self) -> &[(usize, usize)] {
        &self.folds
    }

    pub fn space(&self) -> Space {
        self.space
    }
}
