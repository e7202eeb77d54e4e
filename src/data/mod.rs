pub(crate) mod contacts;
pub(crate) mod loader;
pub(crate) mod types;

pub(crate) use contacts::ContactStore;
pub(crate) use loader::{LoadedData, load_data};
pub(crate) use types::{Contact, ScheduledCall};
