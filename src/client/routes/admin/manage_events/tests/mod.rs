mod filter;
mod sort;
