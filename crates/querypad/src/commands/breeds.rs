use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libquerypad::GraphQlClient;
use libquerypad::QuerySession;

/// List the cat breed identifiers the endpoint knows.
#[derive(Debug, clap::Args)]
pub(crate) struct BreedsCmd {
    #[arg(
        help = "Only list identifiers matching this case-insensitive \
               substring.",
        name = "FILTER",
    )]
    filter: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for BreedsCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let client = GraphQlClient::new(cli.endpoint.clone());
        let mut session = QuerySession::new();
        session.fetch_known_identifiers(&client).await;

        if session.known_identifiers().is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No cat breed identifiers available from `{}`.",
                output_utils::RED_X,
                cli.endpoint,
            ));
        }

        let filter = self.filter.as_deref().unwrap_or("");
        let matching = session.suggestions(filter);
        if matching.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No cat breed identifiers match `{filter}`.",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            "{} {} cat breed identifiers:\n{}",
            output_utils::GREEN_CHECK,
            matching.len(),
            matching.join("\n"),
        ))
    }
}
