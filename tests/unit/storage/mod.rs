mod test_file_store;
