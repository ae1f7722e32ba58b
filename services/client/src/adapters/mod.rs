pub mod nasa;

pub use nasa::NasaPhotoCatalog;
