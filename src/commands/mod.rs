pub mod fmt;
pub mod holistic;
pub mod init;
pub mod introspect;
pub mod outline;
pub mod prune;
pub mod schema;
pub mod toggle;
pub mod view;
