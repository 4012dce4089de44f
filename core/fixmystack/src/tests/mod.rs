mod history_usecase_tests;
mod runner_tests;
mod support;
