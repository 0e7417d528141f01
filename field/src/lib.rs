pub mod cell;
pub mod construct_field;
pub mod coords;
pub mod field;
#[cfg(test)]
mod coords_test;
pub mod player;
pub mod scan;
#[cfg(test)]
mod scan_test;
