use clap::Parser;

use port_inventory::cli::Cli;
use port_inventory::output::write_reports;
use port_inventory::scanner::InventoryScanner;
use port_inventory::{EXIT_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> port_inventory::Result<()> {
    println!("Scanning {} ...", cli.root.display());

    let summary = InventoryScanner::scan(&cli.root)?;
    let (json_path, txt_path) = write_reports(&summary, &cli.output)?;

    println!("Wrote: {}, {}", json_path.display(), txt_path.display());
    Ok(())
}
