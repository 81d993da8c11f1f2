mod apply_flow;
mod ordering;
