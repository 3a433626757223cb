mod notification_tests;
mod product_tests;
mod user_tests;
