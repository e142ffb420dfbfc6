pub mod pages;
pub mod resources;
