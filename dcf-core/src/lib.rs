pub mod gateways;
pub mod usecases;

pub mod entities {
    pub use dcf_entities::{geo::*, location::*, proximity::*};
}
