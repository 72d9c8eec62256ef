pub use authentication::*;

mod authentication;
