mod tests_text;
