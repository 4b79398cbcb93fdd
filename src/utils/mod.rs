pub mod helper;

mod moments;
pub use moments::Moments;

mod extent;
pub use extent::Extent;
