//! Infrastructure concerns: filesystem locations.

pub mod paths;
