mod client;

pub use client::PokeApiClient;
