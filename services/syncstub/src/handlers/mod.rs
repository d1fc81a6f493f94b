pub mod fallback;
pub mod manifest;
pub mod submit;
