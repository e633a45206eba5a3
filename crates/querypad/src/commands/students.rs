use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libquerypad::GraphQlClient;
use libquerypad::QuerySession;

/// Query the `students` collection with a chosen set of fields.
#[derive(Debug, clap::Args)]
pub(crate) struct StudentsCmd {
    #[arg(
        help = "Comma-separated student fields to include in the query \
               (e.g. `name,career`).",
        long,
        required = true,
        value_delimiter = ',',
    )]
    fields: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for StudentsCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let mut session = QuerySession::new();
        for field_name in &self.fields {
            if let Err(toggle_error) = session.toggle_student_field(field_name) {
                return CommandResult::stderr(format_args!(
                    "{} {toggle_error}\n\nAvailable fields: {}",
                    output_utils::RED_X,
                    available_fields(&session),
                ));
            }
        }

        let client = GraphQlClient::new(cli.endpoint.clone());
        log::debug!("Querying students via `{}`.", client.endpoint());
        if let Err(session_error) = session.run_student_query(&client).await {
            return CommandResult::stderr(format_args!(
                "{} {session_error}",
                output_utils::RED_X,
            ));
        }

        CommandResult::stdout(format_args!(
            "{}",
            output_utils::render_flow_report(
                session.student_frozen_query(),
                session.student_request_state(),
                session.student_error(),
            ),
        ))
    }
}

fn available_fields(session: &QuerySession) -> String {
    session.student_selection()
        .schema()
        .fields()
        .iter()
        .map(|field| format!("`{}`", field.name()))
        .collect::<Vec<_>>()
        .join(", ")
}
