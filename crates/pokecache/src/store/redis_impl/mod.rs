mod error;
mod store;

pub use store::RedisStore;
