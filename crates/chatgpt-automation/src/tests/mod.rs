mod precondition_tests;
