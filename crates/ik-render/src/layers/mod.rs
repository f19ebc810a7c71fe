pub mod banner;
pub mod completion;
pub mod input_layer;
pub mod scrollback_layer;
pub mod separator;
pub mod spinner;
pub mod status;

pub use banner::BannerLayer;
pub use completion::CompletionLayer;
pub use input_layer::InputLayer;
pub use scrollback_layer::ScrollbackLayer;
pub use separator::SeparatorLayer;
pub use spinner::SpinnerLayer;
pub use status::StatusLayer;
