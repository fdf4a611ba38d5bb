pub mod value_spec;
