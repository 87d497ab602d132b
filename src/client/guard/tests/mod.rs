mod cookie_value;
mod decide;
