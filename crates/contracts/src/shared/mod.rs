pub mod api;

pub use api::ApiStatus;
