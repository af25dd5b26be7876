pub mod case;
pub mod message;
