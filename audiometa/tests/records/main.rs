#![allow(missing_docs)]

mod bulk;
mod codec;
mod properties;
mod util;
