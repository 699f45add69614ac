pub mod error;
pub mod impl_fallback;
pub mod impl_http;
pub mod impl_sample;
pub mod interface;
