pub mod pending;
pub mod rw;
pub mod tree;
