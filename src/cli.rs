use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "port-inventory")]
#[command(author, version, about = "Source-tree inventory scan for porting analysis")]
#[command(long_about = "Walks a source tree and writes a porting-feasibility inventory:\n\
    file type counts, solution/project files, Windows-API indicator hits,\n\
    oversized files, and referenced .lib/.dll names.\n\n\
    Exit codes:\n  \
    0 - Scan completed and both reports written\n  \
    1 - Filesystem or argument error")]
pub struct Cli {
    /// Root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file prefix; the tool writes <prefix>.json and <prefix>.txt
    #[arg(short, long, default_value = "ANDROID_PORT_INVENTORY")]
    pub output: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
