mod exceptions;
mod porter2;
mod regions;
mod rules;

pub use porter2::porter2_stemmer;
