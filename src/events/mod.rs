pub mod click;
pub mod pointer;
pub mod scroll;

pub use click::*;
pub use pointer::*;
pub use scroll::*;
