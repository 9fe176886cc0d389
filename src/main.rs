use phonebook::cli::CLI;
use phonebook::common::exception::CliError;

fn main() -> Result<(), CliError> {
    let mut cli = CLI::new()?;
    cli.run()
}
