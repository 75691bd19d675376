mod cli;
mod notation;
