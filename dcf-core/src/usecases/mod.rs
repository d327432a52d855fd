mod error;
mod find_nearest;
mod lookup_nearest;

pub use self::{error::Error, find_nearest::*, lookup_nearest::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, gateways::geocode::*};
}
