mod telex_tests;
