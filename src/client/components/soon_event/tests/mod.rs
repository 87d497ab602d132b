mod countdown;
mod nearest;
