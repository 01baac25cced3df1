mod interp;
mod linspace;

pub(crate) use {interp::interp, linspace::linspace};
