pub mod error;
pub mod schema;
pub mod user;

// Re-export common error type
pub use error::CadastroError;
