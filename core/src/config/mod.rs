pub use dialect::ConfigDialect;

mod dialect;
