mod flow;
mod toggle;
