pub mod aggregate;
pub mod profile;
pub mod select;
pub mod single;
pub mod validate;

pub mod util;
