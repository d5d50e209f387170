/// End-to-end tests: tracker, JSON file and tools together
mod basic_integration;
