pub(crate) mod lifecycle;
pub(crate) mod store;

pub(crate) use lifecycle::{DeleteOutcome, ResourceLifecycle};
pub(crate) use store::{ResourceStore, RESOURCES_SLOT};
