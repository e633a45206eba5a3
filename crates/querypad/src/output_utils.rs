use libquerypad::session::RequestState;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Render one flow's outcome the way the session recorded it: the document
/// that was actually dispatched, then the raw response JSON, then any
/// surfaced error message.
pub(crate) fn render_flow_report(
    frozen_query: Option<&str>,
    request_state: &RequestState,
    error_slot: Option<&str>,
) -> String {
    let mut report = String::new();

    if let Some(query) = frozen_query {
        report.push_str("Dispatched query:\n");
        report.push_str(query);
        report.push_str("\n\n");
    }

    match request_state {
        RequestState::Succeeded(Some(envelope)) => {
            report.push_str("Response:\n");
            match serde_json::to_string_pretty(envelope) {
                Ok(pretty) => report.push_str(&pretty),
                Err(_) => report.push_str("(unrenderable envelope)"),
            }
        },

        RequestState::Succeeded(None) => {
            report.push_str("Response: (empty body)");
        },

        RequestState::Failed(message) => {
            report.push_str(&format!("{RED_X} {message}"));
        },

        RequestState::Idle | RequestState::Loading => {
            report.push_str("No response.");
        },
    }

    // A transport failure already rendered its message through the Failed
    // state; only query errors remain to surface here.
    if let Some(message) = error_slot
        && !matches!(request_state, RequestState::Failed(_)) {
        report.push_str(&format!("\n\n{RED_X} {message}"));
    }

    report
}
