pub(crate) mod board_svg;
pub(crate) mod raster;
pub(crate) mod resample;
