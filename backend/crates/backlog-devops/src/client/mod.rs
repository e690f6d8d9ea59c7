pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod options;

pub use client::DevOpsClient;
pub use error::{DevOpsError, Result as DevOpsResult};
pub use options::ClientOptions;
