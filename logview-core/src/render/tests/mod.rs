mod renderer_tests;
