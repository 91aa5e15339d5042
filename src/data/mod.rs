mod store;

pub use store::{ContentStore, DEFAULT_DATA_DIR, LoadError};
