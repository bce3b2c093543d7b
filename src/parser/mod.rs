//! Version range parsing for package.json dependencies

mod node;

pub use node::clean_version;
