mod file_slot;
