mod cache;
mod debounce;
