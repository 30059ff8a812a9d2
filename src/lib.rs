//! Value types shared by the train simulation: delay distributions, simulation
//! clock times, scenery points and colors.

pub mod color;
pub mod delay;
pub mod error;
pub mod point;
pub mod time;

pub use color::{Color, Rgba};
pub use delay::{Bucket, DelayGenerator};
pub use error::{FormatError, ParseError};
pub use point::Point;
pub use time::Time;
