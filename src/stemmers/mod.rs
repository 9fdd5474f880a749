mod en;

pub use en::porter2_stemmer;
