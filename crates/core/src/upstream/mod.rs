mod error;
mod traits;

pub use error::{Result, UpstreamError};
pub use traits::UpstreamApi;
