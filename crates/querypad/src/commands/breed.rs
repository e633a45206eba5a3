use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libquerypad::GraphQlClient;
use libquerypad::QuerySession;
use libquerypad::session::SessionError;

/// Query a single cat breed by its identifier.
#[derive(Debug, clap::Args)]
pub(crate) struct BreedCmd {
    #[arg(
        help = "Identifier of the cat breed to query (e.g. `abys`). Must be \
               one of the identifiers the endpoint knows; try the `breeds` \
               command to list them.",
        name = "BREED_ID",
        required = true,
    )]
    breed_id: String,

    #[arg(
        help = "Comma-separated cat breed fields to include in the query \
               (e.g. `name,origin,weight`).",
        long,
        required = true,
        value_delimiter = ',',
    )]
    fields: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for BreedCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let mut session = QuerySession::new();
        for field_name in &self.fields {
            if let Err(toggle_error) = session.toggle_breed_field(field_name) {
                return CommandResult::stderr(format_args!(
                    "{} {toggle_error}",
                    output_utils::RED_X,
                ));
            }
        }

        let client = GraphQlClient::new(cli.endpoint.clone());
        session.ensure_known_identifiers(&client).await;

        match session.run_breed_query(&client, &self.breed_id).await {
            Ok(()) => {},

            // An unrecognized identifier gets the suggestion treatment the
            // autocomplete dropdown gives it interactively.
            Err(session_error @ SessionError::UnknownIdentifier { .. }) => {
                let suggestions = session.suggestions(&self.breed_id);
                return if suggestions.is_empty() {
                    CommandResult::stderr(format_args!(
                        "{} {session_error}",
                        output_utils::RED_X,
                    ))
                } else {
                    CommandResult::stderr(format_args!(
                        "{} {session_error}\n\nDid you mean: {}?",
                        output_utils::RED_X,
                        suggestions.join(", "),
                    ))
                };
            },

            Err(session_error) => {
                return CommandResult::stderr(format_args!(
                    "{} {session_error}",
                    output_utils::RED_X,
                ));
            },
        }

        CommandResult::stdout(format_args!(
            "{}",
            output_utils::render_flow_report(
                session.breed_frozen_query(),
                session.breed_request_state(),
                session.breed_error(),
            ),
        ))
    }
}
