pub mod factories;
