use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ruzip")]
#[command(version)]
#[command(about = "A Rust zip utility (store method, no compression)", long_about = None)]
#[command(after_help = "Examples:\n  \
  ruzip bundle.zip readme.txt data.json   pack two files into bundle.zip\n  \
  ruzip -r export.zip reports/            pack a directory tree recursively\n  \
  ruzip -j flat.zip logs/app.log          store only the file name, no path\n  \
  ruzip - notes.txt | ssh host 'cat > notes.zip'   write archive to stdout")]
pub struct Cli {
    /// Output archive path ("-" for stdout)
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,

    /// Files or directories to add
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<String>,

    /// Recurse into directories
    #[arg(short = 'r')]
    pub recursive: bool,

    /// Junk paths (store only the file name)
    #[arg(short = 'j')]
    pub junk_paths: bool,

    /// Verbose: report per-entry sizes while adding
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_stdout(&self) -> bool {
        self.archive == "-"
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0 || self.is_stdout()
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }
}
