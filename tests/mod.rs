mod common;
mod cli_tests;
