pub mod scanner_block;
