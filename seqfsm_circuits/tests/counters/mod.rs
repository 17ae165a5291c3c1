mod debounce;
