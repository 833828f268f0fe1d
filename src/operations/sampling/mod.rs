mod resample_polyline;

pub use resample_polyline::ResamplePolyline;
