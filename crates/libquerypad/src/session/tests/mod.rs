mod query_session_tests;
