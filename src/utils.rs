pub mod digit_prefix;
