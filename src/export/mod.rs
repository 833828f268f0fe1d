mod text;

pub use text::{format_point, write_projections, PointParser, TextFormat, POINT_PATTERN};
