//! UI components, one module per region of the frame.
//!
//! Each component is a pure function from view model data and a theme to
//! display lines, keeping rendering logic testable without a terminal.

pub mod footer;
pub mod header;
pub mod results;
pub mod search;
pub mod trending;
