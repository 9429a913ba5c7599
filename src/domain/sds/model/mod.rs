#[macro_use]
mod coded_enum;

pub mod boundary_type;
pub mod interpolation_mode;
pub mod stream;
pub mod stream_index;
pub mod stream_type;
pub mod stream_view;
pub mod type_code;

pub use boundary_type::BoundaryType;
pub use interpolation_mode::InterpolationMode;
pub use stream::{SdsStream, SdsStreamPropertyOverride};
pub use stream_index::StreamIndex;
pub use stream_type::{SdsType, SdsTypeProperty, SdsTypeReference};
pub use stream_view::{SdsStreamView, SdsStreamViewMap, SdsStreamViewProperty};
pub use type_code::SdsTypeCode;
