mod confirm_tests;
