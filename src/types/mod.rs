pub(crate) mod request;
pub(crate) mod user;

pub(crate) use request::ExampleRequest;
pub(crate) use user::{Claims, Identity};
