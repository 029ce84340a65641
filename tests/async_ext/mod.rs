pub mod report_future_tests;
