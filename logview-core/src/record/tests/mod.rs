mod level_tests;
mod message_tests;
