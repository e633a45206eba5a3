use clap::CommandFactory;
use crate::commands;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://graphql.sabanus.site/api/graphql";

#[derive(clap::Parser, Debug)]
#[command(name = "querypad", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        default_value = DEFAULT_ENDPOINT,
        help = "GraphQL endpoint to dispatch queries to.",
        global = true,
        long,
    )]
    pub endpoint: Url,

    #[arg(
        help = "Enable verbose output.",
        global = true,
        long,
        short = 'v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn print_usage(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
