pub mod use_library;
