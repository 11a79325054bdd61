mod tests_grouping;
