use serde::Deserialize;

/// A sample `curl` call printed at the end of the report.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct ExampleRequest {
    pub(crate) comment: String,
    pub(crate) url: String,
    pub(crate) variable: String,
}

impl ExampleRequest {
    pub(crate) fn new(comment: &str, url: &str, variable: &str) -> Self {
        Self {
            comment: comment.to_owned(),
            url: url.to_owned(),
            variable: variable.to_owned(),
        }
    }
}

pub(crate) fn default_requests() -> Vec<ExampleRequest> {
    vec![
        ExampleRequest::new(
            "Test as customer:",
            "http://localhost:8082/api/user-profiles/4",
            "TOKEN_CUSTOMER_4",
        ),
        ExampleRequest::new(
            "Test as admin:",
            "http://localhost:8086/api/event-service/event/1",
            "TOKEN_ADMIN_5",
        ),
    ]
}
