pub mod constants;
pub mod cursor;
pub mod ease;
pub mod scroll;
pub mod sections;
pub mod spring;
pub mod starfield;
pub mod style;
pub mod timeline;
pub mod viewport;

pub use cursor::*;
pub use ease::Ease;
pub use scroll::*;
pub use sections::*;
pub use spring::*;
pub use starfield::*;
pub use timeline::*;
pub use viewport::*;
