pub mod conversation;
pub mod enums;
pub mod medication;
pub mod symptom;

pub use conversation::*;
pub use enums::*;
pub use medication::*;
pub use symptom::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}
