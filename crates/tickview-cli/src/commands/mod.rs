mod view;

use crate::cli::Cli;
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    view::run(cli).await
}
