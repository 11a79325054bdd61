mod tests_jump_destinations;
