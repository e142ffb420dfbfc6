mod artifact;
mod error;
mod keys;
mod serialization;
mod traits;

pub use artifact::is_complete_artifact;
pub use error::{Result, StoreError};
pub use keys::{data_key, history_key, homepage_key, page_key, ROOT_PATH};
pub use serialization::{
    deserialize_record, deserialize_records, record_to_value, SerializationError,
};
pub use traits::KeyValueStore;
