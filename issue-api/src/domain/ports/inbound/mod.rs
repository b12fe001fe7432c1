mod issues;

pub use issues::*;
