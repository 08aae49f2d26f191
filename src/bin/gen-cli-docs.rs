use cap::cli::Cli;
use clap_markdown::help_markdown;

fn main() {
    // Print header
    println!("# cap CLI Reference");
    println!();
    println!("This page contains the auto-generated reference documentation for the `cap` command-line interface.");
    println!();

    println!("{}", help_markdown::<Cli>());
}
