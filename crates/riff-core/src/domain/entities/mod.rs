pub mod descriptor;
pub mod image;
pub mod init_options;

pub use descriptor::{Descriptor, DescriptorFile, DescriptorKind, RenderContext};
pub use image::ImageRef;
pub use init_options::{DEFAULT_VERSION, FunctionRequest, InitOptions};
