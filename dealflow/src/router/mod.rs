pub mod records;
pub mod util;
