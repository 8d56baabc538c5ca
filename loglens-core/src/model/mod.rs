mod aggregate;
mod profile;
mod row;

pub use aggregate::*;
pub use profile::*;
pub use row::*;
