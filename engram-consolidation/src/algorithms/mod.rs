pub mod text;
pub mod topics;
