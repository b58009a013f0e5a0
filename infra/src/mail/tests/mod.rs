//! Unit tests for mail services

mod create_service_tests;
