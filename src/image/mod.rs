pub mod buffer;
pub mod io;

pub use self::buffer::PixelBuffer;
pub use self::io::{load_grayscale_image, save_grayscale_image};
