mod product_spec_tests;
