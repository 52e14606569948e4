mod core;
mod model;

pub(crate) use self::core::scan;
pub(crate) use self::model::{Key, RawScan};
