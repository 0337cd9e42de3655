mod error;
mod extract_header;
mod request;

pub use error::*;
pub use extract_header::*;
pub use request::*;
